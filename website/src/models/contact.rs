use serde::Deserialize;

use sala::dto::LeadSubmission;
use sala::locale::Locale;

/// Raw contact form fields as posted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactFormData {
    /// Builds the outbound payload; whitespace trimmed, blank company dropped
    pub fn into_lead(self, locale: Locale) -> LeadSubmission {
        let company = self
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company,
            message: self.message.trim().to_string(),
            locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_company_becomes_none() {
        let form = ContactFormData {
            name: " Ploy ".to_string(),
            email: "ploy@example.com".to_string(),
            company: Some("   ".to_string()),
            message: "Looking for a document AI pilot.".to_string(),
        };

        let lead = form.into_lead(Locale::En);
        assert_eq!(lead.name, "Ploy");
        assert_eq!(lead.company, None);
        assert_eq!(lead.locale, Locale::En);
    }
}
