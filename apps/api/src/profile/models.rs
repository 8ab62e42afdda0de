use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// Placeholder the model is told to emit for any field it cannot find.
pub const NOT_SPECIFIED: &str = "not specified";

/// Placeholders that must never reach a caller as a resolved field.
const SENTINELS: &[&str] = &[
    NOT_SPECIFIED,
    "não especificado",
    "nao especificado",
    "n/a",
    "none",
    "null",
];

/// Returns true for blank values and for the placeholders the model uses when a field is missing.
pub fn is_sentinel(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value.is_empty() || SENTINELS.contains(&value.as_str())
}

/// Structured candidate data extracted from a resume by the AI service.
///
/// Serialized with the Portuguese keys the upload form reads. The English names
/// are what the response schema asks the model for, so they are accepted on input
/// too. Missing or null fields deserialize to empty values, which the reconciler
/// treats as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedCandidateProfile {
    #[serde(
        rename = "nome_completo",
        alias = "full_name",
        deserialize_with = "lenient_text"
    )]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(
        rename = "telefone",
        alias = "phone",
        deserialize_with = "lenient_text"
    )]
    pub phone: String,
    #[serde(
        rename = "cargo_desejado",
        alias = "desired_role",
        deserialize_with = "lenient_text"
    )]
    pub desired_role: String,
    #[serde(
        rename = "experiencia_anos",
        alias = "years_of_experience",
        deserialize_with = "lenient_years"
    )]
    pub years_of_experience: u32,
    #[serde(
        rename = "principais_habilidades",
        alias = "skills",
        deserialize_with = "lenient_skills"
    )]
    pub skills: Vec<String>,
    #[serde(
        rename = "formacao_academica",
        alias = "academic_background",
        deserialize_with = "lenient_text"
    )]
    pub academic_background: String,
}

/// Output schema sent with structured requests. Every field is required; the prompt
/// asks for [`NOT_SPECIFIED`] or zero when the resume lacks a value.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "full_name": { "type": "STRING" },
            "email": { "type": "STRING" },
            "phone": { "type": "STRING" },
            "desired_role": { "type": "STRING" },
            "years_of_experience": { "type": "INTEGER" },
            "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "academic_background": { "type": "STRING" }
        },
        "required": [
            "full_name",
            "email",
            "phone",
            "desired_role",
            "years_of_experience",
            "skills",
            "academic_background"
        ],
        "propertyOrdering": [
            "full_name",
            "email",
            "phone",
            "desired_role",
            "years_of_experience",
            "skills",
            "academic_background"
        ]
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// Free-text replies sometimes carry "5.5", "5 anos" or a sentinel instead of an integer.
fn lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let years = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.floor() as u64))
            .unwrap_or(0),
        Value::String(s) => s
            .split_whitespace()
            .next()
            .and_then(|token| token.replace(',', ".").parse::<f64>().ok())
            .filter(|f| *f >= 0.0)
            .map(|f| f.floor() as u64)
            .unwrap_or(0),
        _ => 0,
    };
    Ok(u32::try_from(years).unwrap_or(u32::MAX))
}

fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let skills = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) if !is_sentinel(&s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    };
    Ok(skills)
}
