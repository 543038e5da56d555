use serde_json::Value;
use snafu::ResultExt;
use std::collections::HashMap;
use tracing::warn;

use crate::Result;
use crate::error::CatalogParseSnafu;
use crate::locale::Locale;

const TH_MESSAGES: &str = include_str!("../messages/th.json");
const EN_MESSAGES: &str = include_str!("../messages/en.json");

/// Translation catalogs for every supported locale.
///
/// Built once at startup and shared read-only, so request handlers can
/// translate concurrently without locking.
pub struct Catalogs {
    th: HashMap<String, String>,
    en: HashMap<String, String>,
}

impl Catalogs {
    pub fn load() -> Result<Self> {
        Ok(Catalogs {
            th: parse_catalog(Locale::Th, TH_MESSAGES)?,
            en: parse_catalog(Locale::En, EN_MESSAGES)?,
        })
    }

    fn catalog(&self, locale: Locale) -> &HashMap<String, String> {
        match locale {
            Locale::Th => &self.th,
            Locale::En => &self.en,
        }
    }

    /// Translates a key for the given locale.
    ///
    /// A missing key is not an error: the key itself is returned as display
    /// text and the miss is logged.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        match self.catalog(locale).get(key) {
            Some(text) => text.clone(),
            None => {
                warn!("Missing translation key: {} ({})", key, locale);
                key.to_string()
            }
        }
    }

    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self.catalog(locale).keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

fn parse_catalog(locale: Locale, raw: &str) -> Result<HashMap<String, String>> {
    let value: Value = serde_json::from_str(raw).context(CatalogParseSnafu {
        locale: locale.to_string(),
    })?;

    let mut catalog = HashMap::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            if let Value::String(text) = val {
                catalog.insert(key, text);
            }
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        let catalogs = Catalogs::load().unwrap();
        assert_eq!(catalogs.translate(Locale::En, "nav.pricing"), "Pricing");
        assert_eq!(catalogs.translate(Locale::Th, "nav.pricing"), "ราคา");
    }

    #[test]
    fn test_translate_missing_key_falls_back_to_key() {
        let catalogs = Catalogs::load().unwrap();
        assert_eq!(
            catalogs.translate(Locale::En, "nonexistent.key"),
            "nonexistent.key"
        );
    }

    #[test]
    fn test_catalogs_have_identical_key_sets() {
        let catalogs = Catalogs::load().unwrap();
        assert_eq!(catalogs.keys(Locale::Th), catalogs.keys(Locale::En));
        assert!(!catalogs.keys(Locale::Th).is_empty());
    }
}
