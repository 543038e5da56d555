/// Path prefixes that bypass locale resolution and header hardening.
const EXCLUDED_PREFIXES: [&str; 2] = ["/api", "/assets"];

/// Well-known static files served as-is from the site root.
const EXCLUDED_FILES: [&str; 4] = [
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
    "/manifest.json",
];

/// Whether a request path bypasses the locale/security pipeline.
///
/// Prefixes match on segment boundaries only: `/api/contact` is excluded
/// while `/apis` is a regular page path.
pub fn is_excluded(path: &str) -> bool {
    if EXCLUDED_FILES.contains(&path) {
        return true;
    }

    EXCLUDED_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_prefixes() {
        assert!(is_excluded("/api"));
        assert!(is_excluded("/api/contact"));
        assert!(is_excluded("/api/events/page_view"));
        assert!(is_excluded("/assets/main.css"));
    }

    #[test]
    fn test_excluded_files() {
        assert!(is_excluded("/favicon.ico"));
        assert!(is_excluded("/robots.txt"));
        assert!(is_excluded("/sitemap.xml"));
        assert!(is_excluded("/manifest.json"));
    }

    #[test]
    fn test_segment_boundary() {
        assert!(!is_excluded("/apis"));
        assert!(!is_excluded("/api-docs"));
        assert!(!is_excluded("/assetsthing"));
    }

    #[test]
    fn test_regular_paths_not_excluded() {
        assert!(!is_excluded("/"));
        assert!(!is_excluded("/th/pricing"));
        assert!(!is_excluded("/en/cases/retail-chatbot"));
    }
}
