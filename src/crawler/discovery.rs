//! Discovery loop walking seed pages into an ordered set of article URLs
//!
//! This module contains the core discovery logic, including:
//! - The per-run crawl state (dedup + quota)
//! - The seed loop that fetches listings and collects article links
//! - Skip-and-continue handling for failed seeds

use crate::config::Config;
use crate::crawler::fetcher::RequestClient;
use crate::crawler::links::extract_article_links;
use crate::SITE_BASE;
use tracing::{debug, info, warn};
use url::Url;

/// Progress of one discovery run
///
/// Owned by exactly one crawler. Holds the quota and the discovered
/// article URLs, insertion-ordered and duplicate-free; the length never
/// exceeds the quota.
#[derive(Debug)]
pub struct CrawlState {
    discovered: Vec<String>,
    quota: usize,
}

impl CrawlState {
    /// Creates an empty state for the given quota
    pub fn new(quota: usize) -> Self {
        Self {
            discovered: Vec::with_capacity(quota),
            quota,
        }
    }

    /// Whether the quota has been reached
    pub fn is_full(&self) -> bool {
        self.discovered.len() >= self.quota
    }

    /// Inserts a URL unless it is a duplicate or the quota is reached
    ///
    /// Returns true when the URL was added. The discovered set stays small
    /// (quota is at most 150), so a linear duplicate scan is enough.
    pub fn try_insert(&mut self, url: String) -> bool {
        if self.is_full() || self.discovered.contains(&url) {
            return false;
        }
        self.discovered.push(url);
        true
    }

    /// Discovered URLs in first-seen order
    pub fn urls(&self) -> &[String] {
        &self.discovered
    }
}

/// Seed-page crawler
///
/// Walks the configured seed listings in order and collects unique article
/// URLs until the quota is reached. One instance drives one run.
pub struct Crawler {
    seed_urls: Vec<String>,
    base_url: Url,
    state: CrawlState,
}

impl Crawler {
    /// Creates a crawler resolving listing links against the site base
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to discover
    /// * `Err(url::ParseError)` - The site base failed to parse
    pub fn new(config: &Config) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(SITE_BASE)?;
        Ok(Self::with_base(config, base_url))
    }

    /// Creates a crawler with an explicit link-resolution base
    pub fn with_base(config: &Config, base_url: Url) -> Self {
        Self {
            seed_urls: config.seed_urls().to_vec(),
            base_url,
            state: CrawlState::new(config.num_articles()),
        }
    }

    /// Walks the seed pages and returns the discovered article URLs
    ///
    /// Seeds are processed in configured order. A seed whose fetch fails is
    /// logged and skipped; the run continues with the next seed. Candidate
    /// links are taken from each page in document order, each page read
    /// exactly once. Once the quota is reached the loop stops entirely and
    /// no further seed is fetched. An empty result is a valid outcome.
    pub async fn discover(&mut self, client: &RequestClient) -> Vec<String> {
        for seed in &self.seed_urls {
            if self.state.is_full() {
                debug!("quota reached, remaining seeds skipped");
                break;
            }

            let body = match client.fetch(seed).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(seed = %seed, error = %e, "seed fetch failed, moving on");
                    continue;
                }
            };

            let links = extract_article_links(&body, &self.base_url);
            debug!(seed = %seed, count = links.len(), "candidate links on page");

            for link in links {
                if self.state.is_full() {
                    break;
                }
                self.state.try_insert(link);
            }
        }

        info!(count = self.state.urls().len(), "discovery finished");
        self.state.urls().to_vec()
    }
}
