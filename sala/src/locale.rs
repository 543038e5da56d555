use serde::{Deserialize, Serialize};
use std::fmt;

use crate::exclude::is_excluded;

/// Languages the site is published in. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Th,
    En,
}

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::Th, Locale::En];

impl Locale {
    pub const DEFAULT: Locale = Locale::Th;

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Th => "th",
            Locale::En => "en",
        }
    }

    /// Matches a raw path segment against the supported set.
    ///
    /// Tags are matched case-insensitively on the primary subtag only, so
    /// `en-US`, `en_GB` and `TH-x-custom` all match.
    pub fn parse(tag: &str) -> Option<Locale> {
        let primary = normalize_tag(tag);
        SUPPORTED_LOCALES
            .into_iter()
            .find(|l| l.as_str() == primary)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercase and truncate at the first region/script separator
fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .take_while(|c| *c != '-' && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Path is excluded from localization, pass through unmodified
    Bypass,

    /// Path already carries a supported locale segment
    Locale(Locale),

    /// No usable locale segment, redirect to the default-locale equivalent
    Redirect { locale: Locale, location: String },
}

impl Resolution {
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Resolution::Bypass => None,
            Resolution::Locale(locale) => Some(*locale),
            Resolution::Redirect { locale, .. } => Some(*locale),
        }
    }
}

/// Decides the effective locale for a request path.
///
/// Total over arbitrary input: every path maps to exactly one decision and
/// malformed paths fall back to a default-locale redirect, never an error.
pub fn resolve_locale(path: &str) -> Resolution {
    if is_excluded(path) {
        return Resolution::Bypass;
    }

    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");

    if let Some(locale) = Locale::parse(first) {
        return Resolution::Locale(locale);
    }

    Resolution::Redirect {
        locale: Locale::DEFAULT,
        location: redirect_target(path),
    }
}

/// Original path with the default locale segment prepended.
fn redirect_target(path: &str) -> String {
    let rest = path.trim_start_matches('/');
    if rest.is_empty() {
        return format!("/{}", Locale::DEFAULT);
    }
    format!("/{}/{}", Locale::DEFAULT, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!(Locale::parse("th"), Some(Locale::Th));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("en_GB"), Some(Locale::En));
        assert_eq!(Locale::parse("TH-x-custom"), Some(Locale::Th));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("-US"), None);
    }

    #[test]
    fn test_resolve_localized_paths() {
        assert_eq!(resolve_locale("/en/pricing"), Resolution::Locale(Locale::En));
        assert_eq!(resolve_locale("/th/cases"), Resolution::Locale(Locale::Th));
        assert_eq!(resolve_locale("/th"), Resolution::Locale(Locale::Th));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let variant = resolve_locale("/en-US/about");
        let plain = resolve_locale("/en/about");
        assert_eq!(variant, Resolution::Locale(Locale::En));
        assert_eq!(variant.locale(), plain.locale());
    }

    #[test]
    fn test_malformed_region_tag() {
        assert_eq!(
            resolve_locale("/TH-x-custom/cases"),
            Resolution::Locale(Locale::Th)
        );
    }

    #[test]
    fn test_redirects_to_default_locale() {
        assert_eq!(
            resolve_locale("/about"),
            Resolution::Redirect {
                locale: Locale::Th,
                location: "/th/about".to_string(),
            }
        );
        assert_eq!(
            resolve_locale("/pricing"),
            Resolution::Redirect {
                locale: Locale::Th,
                location: "/th/pricing".to_string(),
            }
        );
    }

    #[test]
    fn test_root_redirects_to_default_root() {
        for path in ["", "/", "//"] {
            assert_eq!(
                resolve_locale(path),
                Resolution::Redirect {
                    locale: Locale::Th,
                    location: "/th".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_unsupported_locale_segment() {
        assert_eq!(
            resolve_locale("/fr/about"),
            Resolution::Redirect {
                locale: Locale::Th,
                location: "/th/fr/about".to_string(),
            }
        );
    }

    #[test]
    fn test_excluded_paths_bypass() {
        assert_eq!(resolve_locale("/api/contact"), Resolution::Bypass);
        assert_eq!(resolve_locale("/assets/main.css"), Resolution::Bypass);
        assert_eq!(resolve_locale("/favicon.ico"), Resolution::Bypass);
    }

    #[test]
    fn test_total_over_adversarial_input() {
        // None of these may panic, all must produce a decision
        let paths = [
            "",
            "/",
            "/..",
            "/%2e%2e/etc/passwd",
            "/en%2Fabout",
            "/a/b/c/d/e/f/g/h",
            "/EN_us-x/deep/path",
            "/\u{0e44}\u{0e17}\u{0e22}",
            "/-/-/-",
            "no-leading-slash",
        ];
        for path in paths {
            let decision = resolve_locale(path);
            assert!(decision.locale().is_some() || decision == Resolution::Bypass);
        }
    }

    #[test]
    fn test_malformed_path_prepends_default() {
        assert_eq!(
            resolve_locale("no-leading-slash"),
            Resolution::Redirect {
                locale: Locale::Th,
                location: "/th/no-leading-slash".to_string(),
            }
        );
    }
}
