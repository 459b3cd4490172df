//! Article module for per-page extraction
//!
//! Turns one fetched article page into a uniform record: body text from
//! the site's content container plus optional title, author, and a
//! canonically formatted publication date.

mod date;
mod parser;
mod record;

pub use date::{format_canonical, normalize_date, CANONICAL_DATE_FORMAT};
pub use parser::ArticleParser;
pub use record::ArticleRecord;
