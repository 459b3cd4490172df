//! Uniform article record handed to persistence

use crate::article::date::format_canonical;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// One harvested article
///
/// Created per successfully fetched page and immutable afterwards. The
/// numeric identifier is assigned by the caller and unique within a run;
/// metadata fields are present only when the page actually carried them.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRecord {
    /// Run-unique identifier, assigned in discovery order starting at 1
    #[serde(rename = "id")]
    pub article_id: usize,

    /// Source page URL
    pub url: String,

    /// Extracted body text, empty when no content container was found
    #[serde(skip)]
    pub text: String,

    /// Article title, when found
    pub title: Option<String>,

    /// Article author, when found
    pub author: Option<String>,

    /// Publication date in canonical form, when found and parseable
    #[serde(serialize_with = "serialize_canonical_date")]
    pub date: Option<NaiveDateTime>,
}

impl ArticleRecord {
    /// Publication date rendered canonically, for logs and metadata
    pub fn date_str(&self) -> Option<String> {
        self.date.as_ref().map(format_canonical)
    }
}

fn serialize_canonical_date<S>(
    date: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_canonical(date)),
        None => serializer.serialize_none(),
    }
}
