//! URL helpers for seed validation and link resolution
//!
//! Seed URLs are screened against a pattern before a config is accepted;
//! listing-page hrefs are resolved to absolute HTTP(S) URLs before they
//! enter the discovered set.

mod matcher;

pub use matcher::is_valid_seed_url;

use url::Url;

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - hrefs that fail to resolve against the base
/// - non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            // Only accept HTTP and HTTPS URLs
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/news/").unwrap()
    }

    #[test]
    fn test_resolve_absolute_href() {
        let resolved = resolve_link("https://other.com/article", &base_url());
        assert_eq!(resolved, Some("https://other.com/article".to_string()));
    }

    #[test]
    fn test_resolve_root_relative_href() {
        let resolved = resolve_link("/novosti/123.html", &base_url());
        assert_eq!(
            resolved,
            Some("https://example.com/novosti/123.html".to_string())
        );
    }

    #[test]
    fn test_resolve_path_relative_href() {
        let resolved = resolve_link("123.html", &base_url());
        assert_eq!(
            resolved,
            Some("https://example.com/news/123.html".to_string())
        );
    }

    #[test]
    fn test_skip_special_schemes() {
        assert_eq!(resolve_link("javascript:void(0)", &base_url()), None);
        assert_eq!(resolve_link("mailto:editor@example.com", &base_url()), None);
        assert_eq!(resolve_link("tel:+74812345678", &base_url()), None);
        assert_eq!(resolve_link("data:text/html,hi", &base_url()), None);
    }

    #[test]
    fn test_skip_fragment_only() {
        assert_eq!(resolve_link("#comments", &base_url()), None);
    }

    #[test]
    fn test_skip_empty_href() {
        assert_eq!(resolve_link("", &base_url()), None);
        assert_eq!(resolve_link("   ", &base_url()), None);
    }

    #[test]
    fn test_skip_non_http_result() {
        assert_eq!(resolve_link("ftp://files.example.com/x", &base_url()), None);
    }
}
