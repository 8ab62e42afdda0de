// Resume extraction prompt templates.
// All prompts for the profile module are defined here.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_INVENTION_INSTRUCTION};

/// System prompt for resume field extraction.
pub fn profile_extract_system() -> String {
    format!(
        "You are a precise resume data extractor. {JSON_ONLY_SYSTEM} {NO_INVENTION_INSTRUCTION}"
    )
}

/// Structured-output prompt. Replace `{resume_text}` before sending.
/// The field layout itself is enforced by the response schema.
pub const PROFILE_EXTRACT_PROMPT: &str = r#"Extract the candidate's details from the resume below.

Fields:
- full_name: the candidate's full name
- email: the candidate's email address
- phone: the candidate's phone number, as written
- desired_role: the role or position the candidate is seeking
- years_of_experience: total years of professional experience, as an integer
- skills: the candidate's main skills, most relevant first
- academic_background: highest degree and institution, in one line

RULES:
1. If a text field cannot be found in the resume, use exactly "not specified".
2. If years of experience cannot be determined, use 0.
3. If no skills are listed, return an empty list.

RESUME:
{resume_text}"#;

/// Free-text prompt used when structured output is disabled.
/// Replace `{resume_text}` before sending.
pub const PROFILE_EXTRACT_LEGACY_PROMPT: &str = r#"Analyze this resume and extract the following information as a JSON object:
- full_name (string)
- email (string)
- phone (string)
- desired_role (string)
- years_of_experience (integer)
- skills (list of strings)
- academic_background (string)

Use "not specified" for any text field that is missing and 0 for unknown years of experience.

RESUME:
{resume_text}

Return ONLY the JSON object, with no explanations and no code fences (```json ... ```). Just the raw JSON object."#;
