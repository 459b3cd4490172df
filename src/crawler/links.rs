//! Listing-page link extraction
//!
//! Seed pages list articles inside `div.item__title` blocks; the anchor in
//! each block points at the article page.

use crate::url::resolve_link;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static ARTICLE_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.item__title a[href]").expect("article link selector is valid")
});

/// Extracts candidate article links from one listing page
///
/// Links come from the listing container only, in document order, resolved
/// against the given base. The list is materialized once per fetched page;
/// deduplication and the quota cut happen in the crawl state, never by
/// re-reading the page.
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `base_url` - Base for resolving relative hrefs
///
/// # Returns
///
/// Absolute article URLs in the order they appear on the page
pub fn extract_article_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ARTICLE_LINK)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_extracts_links_in_document_order() {
        let html = r#"
            <html><body>
                <div class="item__title"><a href="/novosti/1.html">One</a></div>
                <div class="item__title"><a href="/novosti/2.html">Two</a></div>
                <div class="item__title"><a href="/novosti/3.html">Three</a></div>
            </body></html>
        "#;

        let links = extract_article_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://example.com/novosti/1.html",
                "https://example.com/novosti/2.html",
                "https://example.com/novosti/3.html",
            ]
        );
    }

    #[test]
    fn test_ignores_links_outside_the_container() {
        let html = r#"
            <html><body>
                <nav><a href="/about.html">About</a></nav>
                <div class="item__title"><a href="/novosti/1.html">One</a></div>
                <footer><a href="/contacts.html">Contacts</a></footer>
            </body></html>
        "#;

        let links = extract_article_links(html, &base_url());
        assert_eq!(links, vec!["https://example.com/novosti/1.html"]);
    }

    #[test]
    fn test_skips_unusable_hrefs() {
        let html = r##"
            <html><body>
                <div class="item__title"><a href="javascript:void(0)">Bad</a></div>
                <div class="item__title"><a href="#more">Anchor</a></div>
                <div class="item__title"><a href="/novosti/1.html">Good</a></div>
            </body></html>
        "##;

        let links = extract_article_links(html, &base_url());
        assert_eq!(links, vec!["https://example.com/novosti/1.html"]);
    }

    #[test]
    fn test_empty_page_yields_no_links() {
        assert!(extract_article_links("<html><body></body></html>", &base_url()).is_empty());
    }

    #[test]
    fn test_container_without_anchor_is_skipped() {
        let html = r#"
            <html><body>
                <div class="item__title">No link here</div>
                <div class="item__title"><a>No href either</a></div>
            </body></html>
        "#;

        assert!(extract_article_links(html, &base_url()).is_empty());
    }
}
