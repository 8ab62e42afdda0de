use serde::Serialize;

use crate::profile::models::{is_sentinel, ExtractedCandidateProfile};

/// Candidate identity fields, as submitted in the form or as resolved for the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Merges form fields with AI-extracted ones: a non-blank form value wins, otherwise
/// the AI value is used unless it is a sentinel. Never fails.
pub fn reconcile(
    form: &IdentityFields,
    ai: Option<&ExtractedCandidateProfile>,
) -> IdentityFields {
    IdentityFields {
        name: resolve(form.name.as_deref(), ai.map(|p| p.full_name.as_str())),
        email: resolve(form.email.as_deref(), ai.map(|p| p.email.as_str())),
        phone: resolve(form.phone.as_deref(), ai.map(|p| p.phone.as_str())),
    }
}

fn resolve(form: Option<&str>, ai: Option<&str>) -> Option<String> {
    let form = form.map(str::trim).filter(|v| !v.is_empty());
    let ai = ai.map(str::trim).filter(|v| !is_sentinel(v));
    form.or(ai).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::NOT_SPECIFIED;

    fn ai_profile(name: &str, email: &str, phone: &str) -> ExtractedCandidateProfile {
        ExtractedCandidateProfile {
            full_name: name.into(),
            email: email.into(),
            phone: phone.into(),
            desired_role: "Engineer".into(),
            years_of_experience: 3,
            skills: vec!["Rust".into()],
            academic_background: NOT_SPECIFIED.into(),
        }
    }

    #[test]
    fn test_form_value_wins() {
        let form = IdentityFields {
            email: Some("a@x.com".into()),
            ..Default::default()
        };
        let ai = ai_profile("Bea", "b@y.com", "123");
        let resolved = reconcile(&form, Some(&ai));
        assert_eq!(resolved.email.as_deref(), Some("a@x.com"));
        assert_eq!(resolved.name.as_deref(), Some("Bea"));
        assert_eq!(resolved.phone.as_deref(), Some("123"));
    }

    #[test]
    fn test_sentinel_never_surfaces() {
        let ai = ai_profile("Não especificado", NOT_SPECIFIED, "");
        let resolved = reconcile(&IdentityFields::default(), Some(&ai));
        assert_eq!(resolved, IdentityFields::default());
    }

    #[test]
    fn test_blank_form_value_falls_back_to_ai() {
        let form = IdentityFields {
            name: Some("   ".into()),
            ..Default::default()
        };
        let ai = ai_profile("Carla Dias", NOT_SPECIFIED, NOT_SPECIFIED);
        let resolved = reconcile(&form, Some(&ai));
        assert_eq!(resolved.name.as_deref(), Some("Carla Dias"));
        assert_eq!(resolved.email, None);
    }

    #[test]
    fn test_no_sources_yields_absent_fields() {
        assert_eq!(
            reconcile(&IdentityFields::default(), None),
            IdentityFields::default()
        );
    }

    #[test]
    fn test_form_only_without_ai() {
        let form = IdentityFields {
            name: Some(" Dan ".into()),
            email: Some("dan@example.com".into()),
            phone: None,
        };
        let resolved = reconcile(&form, None);
        assert_eq!(resolved.name.as_deref(), Some("Dan"));
        assert_eq!(resolved.email.as_deref(), Some("dan@example.com"));
        assert_eq!(resolved.phone, None);
    }
}
