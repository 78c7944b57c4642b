//! Configuration for content fetching
//!
//! Defines settings for page requests and the inter-fetch delay.

use std::env;

/// Configuration for content fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Timeout per page fetch in seconds (default: 10)
    pub timeout_per_page_secs: u64,
    /// Delay between consecutive fetches in milliseconds (default: 1000)
    pub fetch_delay_ms: u64,
    /// Allow loopback and private-network hosts (default: false)
    pub allow_private_hosts: bool,
    /// User-Agent sent with every page request
    pub user_agent: String,
}

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_per_page_secs: env::var("CONTENT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            fetch_delay_ms: env::var("CONTENT_FETCH_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            allow_private_hosts: env::var("CONTENT_FETCH_ALLOW_PRIVATE_HOSTS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            user_agent: env::var("CONTENT_FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_per_page_secs == 0 {
            return Err("timeout_per_page_secs must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            timeout_per_page_secs: 10,
            fetch_delay_ms: 1000,
            allow_private_hosts: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
