// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for ranking providers

use std::env;

pub const DEFAULT_AHREFS_API_URL: &str = "https://api.ahrefs.com/v3/serp-overview/serp-overview";
pub const DEFAULT_VALUESERP_API_URL: &str = "https://api.valueserp.com/search";

/// Configuration for ranking lookups
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Provider-specific configuration
    pub providers: RankingProviderConfig,
    /// Ahrefs request timeout in seconds
    pub ahrefs_timeout_secs: u64,
    /// ValueSERP request timeout in seconds
    pub valueserp_timeout_secs: u64,
}

/// Provider-specific configuration
#[derive(Debug, Clone)]
pub struct RankingProviderConfig {
    /// Ahrefs API key
    pub ahrefs_api_key: Option<String>,
    /// ValueSERP API key
    pub valueserp_api_key: Option<String>,
    /// Ahrefs SERP overview endpoint
    pub ahrefs_api_url: String,
    /// ValueSERP search endpoint
    pub valueserp_api_url: String,
}

impl RankingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            providers: RankingProviderConfig {
                ahrefs_api_key: non_empty_var("AHREFS_API_KEY"),
                valueserp_api_key: non_empty_var("VALUESERP_API_KEY"),
                ahrefs_api_url: env::var("AHREFS_API_URL")
                    .unwrap_or_else(|_| DEFAULT_AHREFS_API_URL.to_string()),
                valueserp_api_url: env::var("VALUESERP_API_URL")
                    .unwrap_or_else(|_| DEFAULT_VALUESERP_API_URL.to_string()),
            },
            ahrefs_timeout_secs: env::var("AHREFS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            valueserp_timeout_secs: env::var("VALUESERP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Missing credentials are allowed; the resolver routes around them
        if self.ahrefs_timeout_secs == 0 {
            return Err("Ahrefs timeout must be greater than 0".to_string());
        }
        if self.valueserp_timeout_secs == 0 {
            return Err("ValueSERP timeout must be greater than 0".to_string());
        }
        if self.providers.ahrefs_api_url.trim().is_empty()
            || self.providers.valueserp_api_url.trim().is_empty()
        {
            return Err("Provider endpoints cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn ahrefs_configured(&self) -> bool {
        self.providers
            .ahrefs_api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }

    pub fn valueserp_configured(&self) -> bool {
        self.providers
            .valueserp_api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Check if any ranking provider is configured
    pub fn has_any_provider(&self) -> bool {
        self.ahrefs_configured() || self.valueserp_configured()
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            providers: RankingProviderConfig {
                ahrefs_api_key: None,
                valueserp_api_key: None,
                ahrefs_api_url: DEFAULT_AHREFS_API_URL.to_string(),
                valueserp_api_url: DEFAULT_VALUESERP_API_URL.to_string(),
            },
            ahrefs_timeout_secs: 30,
            valueserp_timeout_secs: 60,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
