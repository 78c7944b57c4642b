// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ranking lookup and page content retrieval
//!
//! Provides the retrieval half of the co-occurrence pipeline:
//! - Top-ranking URL lookup via Ahrefs (preferred) and ValueSERP (fallback)
//! - Locale profiles for provider parameters
//! - Per-page main-content fetching with a politeness throttle
//!
//! Key features:
//! - Provider failures collapse to empty results, never errors
//! - Deterministic hybrid fallback with provenance tagging
//! - Graceful degradation on page fetch failures

pub mod ahrefs;
pub mod config;
pub mod content;
pub mod locale;
pub mod provider;
pub mod rate_limiter;
pub mod resolver;
pub mod types;
pub mod valueserp;

// Re-export commonly used types
pub use ahrefs::AhrefsProvider;
pub use config::RankingConfig;
pub use locale::{Country, CountryProfile};
pub use provider::RankingProvider;
pub use rate_limiter::FetchThrottle;
pub use resolver::{ProviderSelection, RankingResolver};
pub use types::{Provenance, RankingError, ResolvedRankings, SearchQuery};
pub use valueserp::ValueSerpProvider;

pub use content::{ContentFetchConfig, ContentFetcher, FetchError, PageFetcher};
