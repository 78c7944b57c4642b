// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ranking provider trait definition

use async_trait::async_trait;

use super::types::{Provenance, SearchQuery};

/// Trait for implementing ranking providers
///
/// A provider turns a keyword into the ordered list of top-ranking URLs.
/// Any failure (transport, status, payload, empty result set) is reported
/// as an empty list, so callers can route on emptiness alone.
#[async_trait]
pub trait RankingProvider: Send + Sync {
    /// Fetch the top-ranking URLs for a query
    ///
    /// # Arguments
    /// * `query` - Keyword, locale and result limit
    ///
    /// # Returns
    /// At most `query.result_limit` URLs in rank order, or an empty list
    async fn fetch_rankings(&self, query: &SearchQuery) -> Vec<String>;

    /// Provenance tag reported when this provider's result is used
    fn provenance(&self) -> Provenance;

    /// Get the provider name for logging
    fn name(&self) -> &'static str {
        self.provenance().as_str()
    }

    /// Check if the provider has a credential configured
    fn is_available(&self) -> bool;
}
