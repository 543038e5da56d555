use std::sync::Arc;

use crate::run::AppState;
use sala::i18n::Catalogs;
use sala::locale::Locale;
use sala::security::CspNonce;

/// Shared data every page template receives as `t`.
#[derive(Clone)]
pub struct TemplateData {
    pub locale: Locale,
    pub lang: String,
    pub title: String,
    pub csp_nonce: String,
    pub ga_tag_id: Option<String>,
    messages: Arc<Catalogs>,
}

impl TemplateData {
    pub fn new(state: &AppState, locale: Locale, nonce: Option<CspNonce>) -> TemplateData {
        TemplateData {
            locale,
            lang: locale.as_str().to_string(),
            title: String::from(""),
            csp_nonce: nonce.map(|n| n.value().to_string()).unwrap_or_default(),
            ga_tag_id: state.config.ga_tag_id.clone(),
            messages: state.messages.clone(),
        }
    }

    /// Translate a message key for the page locale
    pub fn msg(&self, key: &str) -> String {
        self.messages.translate(self.locale, key)
    }

    /// Prefix a site path with the page locale
    pub fn href(&self, path: &str) -> String {
        format!("/{}{}", self.lang, path)
    }

    /// Same path under the other language, for the locale switcher
    pub fn alt_href(&self, path: &str) -> String {
        let alt = match self.locale {
            Locale::Th => Locale::En,
            Locale::En => Locale::Th,
        };
        format!("/{}{}", alt, path)
    }
}
