//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the HTTP client from the validated configuration
//! - GET requests for seed pages and article pages
//! - Error classification (timeout, connection, HTTP status, TLS)
//! - Response body decoding per the configured encoding

use crate::config::Config;
use crate::FetchError;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::error::Error;
use tracing::{debug, warn};

/// HTTP client carrying the configured request policy
///
/// Built once per run; every fetch applies the configured headers, the
/// timeout, and the certificate-verification flag.
#[derive(Debug, Clone)]
pub struct RequestClient {
    client: Client,
    encoding: String,
}

impl RequestClient {
    /// Builds a request client from a validated configuration
    ///
    /// Header names or values that passed config validation (both are
    /// strings) but are not legal HTTP tokens are skipped with a warning
    /// rather than failing the run.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(RequestClient)` - Successfully built client
    /// * `Err(reqwest::Error)` - Failed to build the underlying client
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = match HeaderName::from_bytes(name.as_bytes()) {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!(header = %name, "skipping header with invalid name");
                    continue;
                }
            };
            match HeaderValue::from_str(value) {
                Ok(parsed) => {
                    headers.insert(header_name, parsed);
                }
                Err(_) => {
                    warn!(header = %header_name, "skipping header with invalid value");
                }
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .connect_timeout(config.request_timeout())
            .danger_accept_invalid_certs(!config.verify_certificate())
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            encoding: config.encoding().to_string(),
        })
    }

    /// Fetches a URL and returns the decoded response body
    ///
    /// A non-2xx status is an error here; callers treat every failure as
    /// "this page yielded nothing" and continue the run.
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Decoded response body
    /// * `Err(FetchError)` - Classified failure for this one request
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, &e))?;

        Ok(self.decode(url, &bytes))
    }

    /// Decodes response bytes with the configured encoding
    ///
    /// Unknown encoding labels fall back to UTF-8; malformed sequences are
    /// replaced rather than failing the fetch.
    fn decode(&self, url: &str, bytes: &[u8]) -> String {
        let encoding = Encoding::for_label(self.encoding.as_bytes()).unwrap_or_else(|| {
            warn!(
                label = %self.encoding,
                "unknown encoding label, falling back to UTF-8"
            );
            UTF_8
        });

        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            warn!(url, encoding = encoding.name(), "malformed byte sequences in response body");
        }

        text.into_owned()
    }
}

/// Classifies a transport error into one of the fetch failure reasons
///
/// Timeouts are checked first since a stalled TLS handshake still reports
/// as a timeout. TLS failures surface inside connect errors, so the
/// connect branch refines its cause with a best-effort scan of the error
/// chain before settling on a plain connection failure.
fn classify_error(url: &str, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout {
            url: url.to_string(),
        };
    }

    if error.is_connect() && is_tls_error(error) {
        return FetchError::Tls {
            url: url.to_string(),
            message: error.to_string(),
        };
    }

    FetchError::Connection {
        url: url.to_string(),
        message: error.to_string(),
    }
}

/// Best-effort scan of a connect error's source chain for a TLS cause
fn is_tls_error(error: &reqwest::Error) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string().to_lowercase();
        if text.contains("certificate") || text.contains("tls") || text.contains("handshake") {
            return true;
        }
        source = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate, RawConfig};
    use serde_json::json;

    fn config_with(encoding: &str, headers: serde_json::Value) -> Config {
        let raw: RawConfig = serde_json::from_value(json!({
            "seed_urls": ["https://example.com/news/"],
            "total_articles_to_find_and_parse": 5,
            "headers": headers,
            "encoding": encoding,
            "timeout": 5,
            "should_verify_certificate": true,
            "headless_mode": false
        }))
        .unwrap();
        validate(&raw).unwrap()
    }

    #[test]
    fn test_build_client_from_config() {
        let config = config_with("utf-8", json!({"user-agent": "vestnik-test"}));
        assert!(RequestClient::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_header_names_are_skipped() {
        let config = config_with("utf-8", json!({"bad header name": "x", "accept": "text/html"}));
        assert!(RequestClient::new(&config).is_ok());
    }

    #[test]
    fn test_decode_windows_1251() {
        let config = config_with("cp1251", json!({}));
        let client = RequestClient::new(&config).unwrap();

        // "привет" in windows-1251
        let bytes = [0xEF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        assert_eq!(client.decode("http://x/", &bytes), "привет");
    }

    #[test]
    fn test_unknown_encoding_falls_back_to_utf8() {
        let config = config_with("klingon", json!({}));
        let client = RequestClient::new(&config).unwrap();

        assert_eq!(client.decode("http://x/", "привет".as_bytes()), "привет");
    }

    // Fetch-path failures (timeouts, refused connections, HTTP statuses)
    // are exercised with wiremock in the integration tests.
}
