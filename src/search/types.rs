// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for ranking lookups

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::locale::{Country, CountryProfile};

/// A ranking lookup for one keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The keyword to look up
    pub keyword: String,
    /// Locale the rankings are requested for
    pub country: Country,
    /// Maximum number of URLs to return
    pub result_limit: usize,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, country: Country, result_limit: usize) -> Self {
        Self {
            keyword: keyword.into(),
            country,
            result_limit,
        }
    }

    /// Provider-facing locale parameters for this query
    pub fn profile(&self) -> &'static CountryProfile {
        self.country.profile()
    }
}

/// Which provider produced a URL list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Ahrefs,
    ValueSerp,
    None,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Ahrefs => "ahrefs",
            Provenance::ValueSerp => "valueserp",
            Provenance::None => "none",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered URLs plus the provider that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRankings {
    pub urls: Vec<String>,
    pub provenance: Provenance,
}

impl ResolvedRankings {
    pub fn new(urls: Vec<String>, provenance: Provenance) -> Self {
        Self { urls, provenance }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Errors raised inside a ranking provider
///
/// These never cross the [`RankingProvider`](super::provider::RankingProvider)
/// boundary; providers log them and report an empty URL list instead.
#[derive(Debug, Error)]
pub enum RankingError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Request timed out
    #[error("Ranking request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Transport failure before a response arrived
    #[error("Ranking request failed: {message}")]
    Transport {
        /// Error message
        message: String,
    },

    /// API answered with a non-success status
    #[error("Ranking API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body did not match the expected payload
    #[error("Malformed ranking payload: {0}")]
    MalformedPayload(String),

    /// Provider envelope reported failure
    #[error("Ranking request rejected by provider: {0}")]
    Rejected(String),
}

impl RankingError {
    pub(crate) fn from_send(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            RankingError::Timeout { timeout_ms }
        } else {
            RankingError::Transport {
                message: error.to_string(),
            }
        }
    }
}
