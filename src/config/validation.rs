use crate::config::types::{Config, RawConfig};
use crate::url::is_valid_seed_url;
use crate::ConfigError;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// Validates every raw field and assembles the immutable configuration
///
/// Field rules run in declaration order and fail fast; a `Config` is
/// produced only when all of them pass.
pub(crate) fn validate(raw: &RawConfig) -> Result<Config, ConfigError> {
    let seed_urls = validate_seed_urls(&raw.seed_urls)?;
    let num_articles = validate_num_articles(&raw.num_articles)?;
    let headers = validate_headers(&raw.headers)?;
    let encoding = validate_encoding(&raw.encoding)?;
    let timeout = validate_timeout(&raw.timeout)?;
    let verify_certificate = validate_verify_flag(&raw.should_verify_certificate)?;

    Ok(Config {
        seed_urls,
        num_articles,
        headers,
        encoding,
        timeout,
        verify_certificate,
        headless_mode: raw.headless_mode,
    })
}

/// Validates the seed URL list
///
/// Every entry must be a string matching the seed pattern (scheme and
/// `www.` optional) and must parse structurally once a missing scheme is
/// filled in, so nothing unresolvable reaches the fetch layer. Seeds are
/// stored in absolute form.
fn validate_seed_urls(value: &Value) -> Result<Vec<String>, ConfigError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ConfigError::InvalidSeedUrl(value.to_string()))?;

    let mut seeds = Vec::with_capacity(entries.len());
    for entry in entries {
        let seed = entry
            .as_str()
            .ok_or_else(|| ConfigError::InvalidSeedUrl(entry.to_string()))?;

        if !is_valid_seed_url(seed) {
            return Err(ConfigError::InvalidSeedUrl(seed.to_string()));
        }

        let absolute = if seed.starts_with("http://") || seed.starts_with("https://") {
            seed.to_string()
        } else {
            format!("https://{seed}")
        };

        if Url::parse(&absolute).is_err() {
            return Err(ConfigError::InvalidSeedUrl(seed.to_string()));
        }
        seeds.push(absolute);
    }

    Ok(seeds)
}

/// Validates the article quota
///
/// A value that is not a non-negative integer is one failure kind; an
/// integer outside 1..=150 is another. The type check runs first.
fn validate_num_articles(value: &Value) -> Result<usize, ConfigError> {
    let count = match value.as_i64() {
        Some(n) if n >= 0 => n,
        _ => return Err(ConfigError::InvalidNumArticles(value.to_string())),
    };

    if !(1..=150).contains(&count) {
        return Err(ConfigError::NumArticlesOutOfRange(count));
    }

    Ok(count as usize)
}

/// Validates the request header map
fn validate_headers(value: &Value) -> Result<HashMap<String, String>, ConfigError> {
    let entries = value
        .as_object()
        .ok_or_else(|| ConfigError::InvalidHeaders(value.to_string()))?;

    let mut headers = HashMap::with_capacity(entries.len());
    for (name, val) in entries {
        let val = val
            .as_str()
            .ok_or_else(|| ConfigError::InvalidHeaders(format!("{name}: {val}")))?;
        headers.insert(name.clone(), val.to_string());
    }

    Ok(headers)
}

/// Validates the response encoding label
fn validate_encoding(value: &Value) -> Result<String, ConfigError> {
    match value.as_str() {
        Some(label) if !label.is_empty() => Ok(label.to_string()),
        _ => Err(ConfigError::InvalidEncoding(value.to_string())),
    }
}

/// Validates the request timeout
///
/// Accepted values are whole seconds strictly between 0 and 60, so every
/// network call stays bounded.
fn validate_timeout(value: &Value) -> Result<u64, ConfigError> {
    let seconds = value
        .as_i64()
        .ok_or_else(|| ConfigError::InvalidTimeout(value.to_string()))?;

    if seconds <= 0 || seconds >= 60 {
        return Err(ConfigError::InvalidTimeout(seconds.to_string()));
    }

    Ok(seconds as u64)
}

/// Validates the certificate verification flag
fn validate_verify_flag(value: &Value) -> Result<bool, ConfigError> {
    value
        .as_bool()
        .ok_or_else(|| ConfigError::InvalidVerifyFlag(value.to_string()))
}
