//! Crawler module for seed-page discovery
//!
//! This module contains the discovery half of the pipeline, including:
//! - HTTP fetching with the configured request policy
//! - Listing-page link extraction
//! - The quota-bounded, duplicate-free discovery loop

mod discovery;
mod fetcher;
mod links;

pub use discovery::{CrawlState, Crawler};
pub use fetcher::RequestClient;
pub use links::extract_article_links;
