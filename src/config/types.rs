use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration file contents before field validation
///
/// The validated fields stay as raw JSON values so each shape violation
/// maps to its own `ConfigError` kind instead of one opaque
/// deserialization error. `headless_mode` is typed at the file level;
/// a non-boolean there is a top-level shape failure.
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    pub seed_urls: Value,

    #[serde(rename = "total_articles_to_find_and_parse")]
    pub num_articles: Value,

    pub headers: Value,

    pub encoding: Value,

    pub timeout: Value,

    pub should_verify_certificate: Value,

    pub headless_mode: bool,
}

/// Validated crawl configuration
///
/// Constructed only by `load_config`; every field passed its rule before
/// the instance exists and nothing is mutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) seed_urls: Vec<String>,
    pub(crate) num_articles: usize,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) encoding: String,
    pub(crate) timeout: u64,
    pub(crate) verify_certificate: bool,
    pub(crate) headless_mode: bool,
}

impl Config {
    /// Seed listing pages, in configured order
    pub fn seed_urls(&self) -> &[String] {
        &self.seed_urls
    }

    /// Number of unique articles to discover and parse
    pub fn num_articles(&self) -> usize {
        self.num_articles
    }

    /// Request headers applied to every fetch
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Response body encoding label (e.g. "utf-8")
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Request timeout in whole seconds
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Whether TLS certificates are verified on fetch
    pub fn verify_certificate(&self) -> bool {
        self.verify_certificate
    }

    /// Whether headless rendering was requested. The flag is parsed and
    /// surfaced but never acted on.
    pub fn headless_mode(&self) -> bool {
        self.headless_mode
    }
}
