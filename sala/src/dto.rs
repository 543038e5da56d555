use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::locale::Locale;

/// Lead-capture payload forwarded to the contact backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeadSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    #[validate(length(min = 3, max = 250))]
    pub email: String,

    #[validate(length(max = 150))]
    pub company: Option<String>,

    #[validate(length(min = 10, max = 5000))]
    pub message: String,

    pub locale: Locale,
}

/// Flattens validation errors into a single display string, fields sorted
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();

    let field_errors = errors.field_errors();
    let messages: Vec<String> = fields
        .into_iter()
        .map(|k| {
            let Some(item) = field_errors.get(k.as_str()) else {
                return format!("{}: invalid", k);
            };
            let msgs: Vec<String> = item.iter().map(error_to_string).collect();
            format!("{}: {}", k, msgs.join(", "))
        })
        .collect();

    messages.join(", ")
}

fn error_to_string(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "email" => "invalid email".to_string(),
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), Some(max)) => {
                format!("must be between {} and {} characters", min, max)
            }
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            _ => "invalid length".to_string(),
        },
        _ => "invalid".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Somchai J.".to_string(),
            email: "somchai@example.co.th".to_string(),
            company: Some("Example Co".to_string()),
            message: "We would like a chatbot for our support team.".to_string(),
            locale: Locale::Th,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(valid_lead().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_short_message() {
        let mut lead = valid_lead();
        lead.email = "not-an-email".to_string();
        lead.message = "hi".to_string();

        let errors = lead.validate().unwrap_err();
        let flattened = flatten_errors(&errors);
        assert!(flattened.contains("email: invalid email"));
        assert!(flattened.contains("message: must be between 10 and 5000 characters"));
    }

    #[test]
    fn test_company_is_optional() {
        let mut lead = valid_lead();
        lead.company = None;
        assert!(lead.validate().is_ok());
    }
}
