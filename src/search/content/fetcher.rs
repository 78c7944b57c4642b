//! HTTP content fetching with timeouts
//!
//! Fetches web page text for URLs returned by ranking providers. Every
//! failure collapses to an empty string so one bad page never aborts a run.

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::ContentFetchConfig;
use super::extractor::extract_main_content;

/// Bytes of the document inspected for a `<meta>` charset declaration
const META_SNIFF_BYTES: usize = 1024;

fn charset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)charset\s*=\s*["']?([a-z0-9_.:-]+)"#).unwrap())
}

fn meta_charset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([a-z0-9_.:-]+)"#).unwrap()
    })
}

/// Content fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),
    /// Response body could not be read
    #[error("Unreadable body from {0}: {1}")]
    Body(String, String),
    /// URL is unsafe (localhost, private IP) or not http(s)
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),
}

/// Source of page text, one URL at a time
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the main-content text of a page
    ///
    /// Returns an empty string on any failure.
    async fn fetch_text(&self, url: &str) -> String;
}

/// Content fetcher backed by reqwest and scraper
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_per_page_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch page text with an explicit timeout
    ///
    /// Returns an empty string on network error, non-success status or an
    /// unreadable body.
    pub async fn fetch_text_with_timeout(&self, url: &str, timeout: Duration) -> String {
        match self.fetch_html(url, timeout).await {
            Ok(html) => {
                let text = extract_main_content(&html);
                info!("Fetched {} chars from: {}", text.chars().count(), url);
                text
            }
            Err(e) => {
                warn!("Content fetch failed: {}", e);
                String::new()
            }
        }
    }

    async fn fetch_html(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        if !self.config.allow_private_hosts && !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        debug!("Fetching content from: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::HttpError(format!("{}: {}", url, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let header_charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| charset_pattern().captures(value))
            .map(|caps| caps[1].to_string());

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(url.to_string(), e.to_string())
            }
        })?;

        Ok(decode_body(&body, header_charset.as_deref()))
    }

    /// Check if URL is safe to fetch (http/https, not localhost/private IP)
    pub fn is_safe_url(url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !["http", "https"].contains(&parsed.scheme()) {
            return false;
        }

        match parsed.host_str() {
            Some(host) => !is_private_host(&host.to_lowercase()),
            None => false,
        }
    }

    /// Per-page timeout from configuration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_per_page_secs)
    }
}

#[async_trait]
impl PageFetcher for ContentFetcher {
    async fn fetch_text(&self, url: &str) -> String {
        self.fetch_text_with_timeout(url, self.timeout()).await
    }
}

/// Decode an HTML body: header charset, then `<meta>` declaration, then UTF-8
fn decode_body(body: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        debug!("Malformed {} sequences replaced", used.name());
    }
    text.into_owned()
}

fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_BYTES)]);
    let caps = meta_charset_pattern().captures(&head)?;
    Encoding::for_label(caps[1].as_bytes())
}

fn is_private_host(host: &str) -> bool {
    if host == "localhost" || host == "0.0.0.0" || host == "[::1]" {
        return true;
    }
    if host.starts_with("127.")
        || host.starts_with("10.")
        || host.starts_with("192.168.")
        || host.starts_with("169.254.")
    {
        return true;
    }
    // 172.16.0.0/12
    if let Some(rest) = host.strip_prefix("172.") {
        if let Some(second) = rest.split('.').next().and_then(|o| o.parse::<u8>().ok()) {
            return (16..=31).contains(&second);
        }
    }
    false
}
