//! Per-article page parser
//!
//! One parser instance covers one discovered URL. It fetches the page,
//! pulls the body text out of the site's content container, and collects
//! whatever metadata the page carries. Missing metadata never fails a
//! parse; only a failed fetch or a structureless document does.

use crate::article::date::normalize_date;
use crate::article::record::ArticleRecord;
use crate::crawler::RequestClient;
use crate::ParseError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Candidate selectors per extracted field, tried in order
struct SiteSelectors {
    content: Vec<Selector>,
    title: Vec<Selector>,
    author: Vec<Selector>,
    date: Vec<Selector>,
}

static SELECTORS: Lazy<SiteSelectors> = Lazy::new(|| SiteSelectors {
    content: parse_all(&["div.item-content", "div.item__content"]),
    title: parse_all(&["h1.item__title", "div.item__title", "h1"]),
    author: parse_all(&[".item__author", "[itemprop=\"author\"]", ".author"]),
    date: parse_all(&[
        ".item__date",
        "time[datetime]",
        "[itemprop=\"datePublished\"]",
        ".date",
    ]),
});

static ANY_BODY_ELEMENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body *").expect("site selector is valid"));

fn parse_all(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).expect("site selector is valid"))
        .collect()
}

/// Parser for one article page
///
/// One instance per (URL, identifier) pair; the identifier is assigned by
/// the caller in discovery order.
pub struct ArticleParser {
    url: String,
    article_id: usize,
}

impl ArticleParser {
    /// Creates a parser for the given article URL and identifier
    pub fn new(url: impl Into<String>, article_id: usize) -> Self {
        Self {
            url: url.into(),
            article_id,
        }
    }

    /// Fetches the article page and extracts a record from it
    ///
    /// # Returns
    ///
    /// * `Ok(ArticleRecord)` - The extracted article; body text is empty
    ///   when the content container is absent, metadata fields are None
    ///   when not found
    /// * `Err(ParseError::Fetch)` - The page could not be fetched
    /// * `Err(ParseError::Markup)` - The response carries no element
    ///   structure and never declared a document shell (empty or
    ///   plain-text payload)
    pub async fn parse(&self, client: &RequestClient) -> Result<ArticleRecord, ParseError> {
        let body = client.fetch(&self.url).await?;
        self.extract(&body)
    }

    fn extract(&self, html: &str) -> Result<ArticleRecord, ParseError> {
        let document = Html::parse_document(html);

        if document.select(&ANY_BODY_ELEMENT).next().is_none() && !has_markup_shell(html) {
            return Err(ParseError::Markup {
                url: self.url.clone(),
            });
        }

        let text = extract_first_match(&document, &SELECTORS.content).unwrap_or_default();
        if text.is_empty() {
            debug!(url = %self.url, "no content container, body left empty");
        }

        let title = extract_first_match(&document, &SELECTORS.title);
        let author = extract_first_match(&document, &SELECTORS.author);
        let date = extract_date_text(&document).and_then(|raw| normalize_date(&raw));

        Ok(ArticleRecord {
            article_id: self.article_id,
            url: self.url.clone(),
            text,
            title,
            author,
            date,
        })
    }
}

/// Whether the raw payload declares an HTML document shell
///
/// The HTML parser synthesizes `<html>`/`<body>` around any input, so an
/// element-free body only means "unparseable markup" when the payload
/// never declared a shell itself. A text-only body behind a real shell is
/// a page without a content container, not a markup failure.
fn has_markup_shell(html: &str) -> bool {
    let lowered = html.to_lowercase();
    lowered.contains("<html") || lowered.contains("<body")
}

/// Returns the text of the first non-empty element matching any selector
fn extract_first_match(document: &Html, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        if let Some(element) = document.select(selector).next() {
            let text = element_text(&element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Raw date text, preferring a `datetime` attribute over element text
fn extract_date_text(document: &Html) -> Option<String> {
    for selector in &SELECTORS.date {
        if let Some(element) = document.select(selector).next() {
            if let Some(datetime) = element.value().attr("datetime") {
                let datetime = datetime.trim();
                if !datetime.is_empty() {
                    return Some(datetime.to_string());
                }
            }
            let text = element_text(&element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Collects an element's text with whitespace runs collapsed
fn element_text(element: &ElementRef) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
