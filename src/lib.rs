//! Vestnik: a batch article harvester for the Kray Dorogobuzhsky news site
//!
//! This crate implements a quota-bounded harvester: it validates a crawl
//! configuration, walks the configured seed listing pages to discover unique
//! article URLs, then fetches each article and extracts its body text and
//! metadata into uniform records ready for persistence.

pub mod article;
pub mod config;
pub mod crawler;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Base address of the harvested site. Relative listing links resolve
/// against this unless a crawler is built with an explicit base.
pub const SITE_BASE: &str = "https://край-дорогобужский.рф";

/// Main error type for harvester operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Article parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// One kind per validated field, so a rejected config names exactly which
/// rule it broke. `Io` and `Parse` cover failures before field validation
/// starts (unreadable file, non-JSON content, missing keys).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed URL: {0}")]
    InvalidSeedUrl(String),

    #[error("Article count must be a non-negative integer, got {0}")]
    InvalidNumArticles(String),

    #[error("Article count must be between 1 and 150, got {0}")]
    NumArticlesOutOfRange(i64),

    #[error("Headers must be a string-to-string map: {0}")]
    InvalidHeaders(String),

    #[error("Encoding must be a non-empty string: {0}")]
    InvalidEncoding(String),

    #[error("Timeout must be an integer strictly between 0 and 60, got {0}")]
    InvalidTimeout(String),

    #[error("Certificate verification flag must be a boolean, got {0}")]
    InvalidVerifyFlag(String),
}

/// Errors raised by a single HTTP fetch
///
/// Every variant is scoped to one request. Callers treat any of them as
/// "this page yielded nothing" and move on; they never abort a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connection { url: String, message: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("TLS failure for {url}: {message}")]
    Tls { url: String, message: String },
}

/// Errors raised while parsing one article page
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Document at {url} is not parseable markup")]
    Markup { url: String },
}

/// Errors raised while persisting one article record
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write article file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize article metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for harvester operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use article::{ArticleParser, ArticleRecord};
pub use config::Config;
pub use crawler::{Crawler, RequestClient};
pub use storage::{prepare_environment, ArticleStore, FsStore};
