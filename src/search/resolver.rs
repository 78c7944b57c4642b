// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ranking resolution across providers
//!
//! Ahrefs is authoritative; ValueSERP is consulted only when Ahrefs is not
//! configured or comes back empty. Results are never merged.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::ahrefs::AhrefsProvider;
use super::config::RankingConfig;
use super::provider::RankingProvider;
use super::types::{Provenance, RankingError, ResolvedRankings, SearchQuery};
use super::valueserp::ValueSerpProvider;

/// Which provider(s) a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSelection {
    /// Ahrefs only
    Ahrefs,
    /// ValueSERP only
    ValueSerp,
    /// Ahrefs with ValueSERP fallback; also used for unrecognised values
    #[default]
    #[serde(other)]
    Hybrid,
}

/// Resolves a query to ranked URLs using the primary/fallback providers
pub struct RankingResolver {
    primary: Arc<dyn RankingProvider>,
    fallback: Arc<dyn RankingProvider>,
}

impl RankingResolver {
    /// Create a resolver from explicit providers
    pub fn new(primary: Arc<dyn RankingProvider>, fallback: Arc<dyn RankingProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Create a resolver backed by Ahrefs and ValueSERP from configuration
    pub fn from_config(config: &RankingConfig) -> Result<Self, RankingError> {
        let ahrefs = AhrefsProvider::new(
            config.providers.ahrefs_api_key.clone().unwrap_or_default(),
            config.providers.ahrefs_api_url.clone(),
            Duration::from_secs(config.ahrefs_timeout_secs),
        )?;
        let valueserp = ValueSerpProvider::new(
            config.providers.valueserp_api_key.clone().unwrap_or_default(),
            config.providers.valueserp_api_url.clone(),
            Duration::from_secs(config.valueserp_timeout_secs),
        )?;

        if ahrefs.is_available() {
            debug!("Ahrefs provider enabled");
        }
        if valueserp.is_available() {
            debug!("ValueSERP provider enabled (fallback)");
        }

        Ok(Self::new(Arc::new(ahrefs), Arc::new(valueserp)))
    }

    /// Resolve rankings for the requested provider mode
    ///
    /// Single-provider modes call that provider directly and report its tag
    /// even when it returns nothing.
    pub async fn resolve(
        &self,
        selection: ProviderSelection,
        query: &SearchQuery,
    ) -> ResolvedRankings {
        match selection {
            ProviderSelection::Ahrefs => self.single(&self.primary, query).await,
            ProviderSelection::ValueSerp => self.single(&self.fallback, query).await,
            ProviderSelection::Hybrid => self.hybrid(query).await,
        }
    }

    /// Try the primary provider, fall back to the secondary
    pub async fn hybrid(&self, query: &SearchQuery) -> ResolvedRankings {
        let start = Instant::now();

        if self.primary.is_available() {
            debug!("Trying ranking provider: {}", self.primary.name());
            let urls = self.primary.fetch_rankings(query).await;
            if !urls.is_empty() {
                info!(
                    "Rankings resolved: {} urls from {} in {}ms",
                    urls.len(),
                    self.primary.name(),
                    start.elapsed().as_millis()
                );
                return ResolvedRankings::new(urls, self.primary.provenance());
            }
            warn!(
                "Ranking provider {} returned no results",
                self.primary.name()
            );
        }

        if self.fallback.is_available() {
            info!("Falling back to ranking provider: {}", self.fallback.name());
            let urls = self.fallback.fetch_rankings(query).await;
            info!(
                "Rankings resolved: {} urls from {} in {}ms",
                urls.len(),
                self.fallback.name(),
                start.elapsed().as_millis()
            );
            return ResolvedRankings::new(urls, self.fallback.provenance());
        }

        warn!("No ranking provider configured");
        ResolvedRankings::new(Vec::new(), Provenance::None)
    }

    async fn single(
        &self,
        provider: &Arc<dyn RankingProvider>,
        query: &SearchQuery,
    ) -> ResolvedRankings {
        if !provider.is_available() {
            warn!("Ranking provider {} has no API key configured", provider.name());
        }
        let urls = provider.fetch_rankings(query).await;
        ResolvedRankings::new(urls, provider.provenance())
    }

    pub fn primary_available(&self) -> bool {
        self.primary.is_available()
    }

    pub fn fallback_available(&self) -> bool {
        self.fallback.is_available()
    }

    /// Get list of available provider names
    pub fn available_providers(&self) -> Vec<&'static str> {
        [&self.primary, &self.fallback]
            .into_iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }
}
