//! Configuration module for Vestnik
//!
//! This module handles loading, parsing, and validating the JSON crawl
//! configuration. A `Config` value exists only after every field rule has
//! passed; nothing in the crate touches the network before this gate.
//!
//! # Example
//!
//! ```no_run
//! use vestnik::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper_config.json")).unwrap();
//! println!("Harvesting up to {} articles", config.num_articles());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::Config;

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

#[cfg(test)]
pub(crate) use types::RawConfig;
#[cfg(test)]
pub(crate) use validation::validate;
