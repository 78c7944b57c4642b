// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Read-only application context
//!
//! Built once at start-up and shared by every request: providers, fetcher
//! and the term extractor with its optional segmenter.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use super::config::AppConfig;
use crate::search::{
    locale, ContentFetcher, FetchError, PageFetcher, RankingError, RankingResolver,
};
use crate::terms::{load_segmenter, TermExtractor};

/// Errors building the context
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Ranking client setup failed: {0}")]
    Ranking(#[from] RankingError),

    #[error("Content fetcher setup failed: {0}")]
    Fetcher(#[from] FetchError),
}

/// Shared services for extraction runs
pub struct AppContext {
    pub(crate) resolver: RankingResolver,
    pub(crate) fetcher: Arc<dyn PageFetcher>,
    pub(crate) extractor: TermExtractor,
    pub(crate) fetch_delay: Duration,
}

impl AppContext {
    pub fn new(
        resolver: RankingResolver,
        fetcher: Arc<dyn PageFetcher>,
        extractor: TermExtractor,
        fetch_delay: Duration,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            extractor,
            fetch_delay,
        }
    }

    /// Build the production context: Ahrefs, ValueSERP, HTTP fetcher and
    /// a vibrato segmenter when a dictionary is configured
    pub fn from_config(config: &AppConfig) -> Result<Self, ContextError> {
        config.validate().map_err(ContextError::Config)?;

        let resolver = RankingResolver::from_config(&config.ranking)?;
        let fetcher = ContentFetcher::new(config.content.clone())?;
        let extractor = TermExtractor::new(load_segmenter(&config.tokenizer));

        Ok(Self::new(
            resolver,
            Arc::new(fetcher),
            extractor,
            Duration::from_millis(config.content.fetch_delay_ms),
        ))
    }

    pub fn tokenizer_available(&self) -> bool {
        self.extractor.is_morphological()
    }

    pub fn ahrefs_configured(&self) -> bool {
        self.resolver.primary_available()
    }

    pub fn valueserp_configured(&self) -> bool {
        self.resolver.fallback_available()
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    /// Log which capabilities are active
    pub fn log_startup_banner(&self) {
        info!("{}", crate::version::get_version_string());
        info!(
            "Tokenizer: {}",
            if self.tokenizer_available() {
                "morphological"
            } else {
                "pattern fallback"
            }
        );
        info!(
            "Ahrefs API: {}",
            if self.ahrefs_configured() { "configured" } else { "not configured" }
        );
        info!(
            "ValueSERP API: {}",
            if self.valueserp_configured() { "configured" } else { "not configured" }
        );
        info!("Supported countries: {}", locale::supported_count());

        let providers = self.resolver.available_providers();
        if providers.is_empty() {
            warn!("No ranking provider configured; every request will fail");
        } else {
            info!("Ranking providers (hybrid order): {}", providers.join(" -> "));
        }
    }
}
