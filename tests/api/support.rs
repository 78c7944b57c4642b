// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router fixtures

use async_trait::async_trait;
use axum::{body::Body, http::Response};
use cooccur_node::pipeline::AppContext;
use cooccur_node::search::{
    PageFetcher, Provenance, RankingProvider, RankingResolver, SearchQuery,
};
use cooccur_node::terms::TermExtractor;
use std::sync::Arc;
use std::time::Duration;

pub struct ListProvider {
    pub urls: Vec<String>,
    pub provenance: Provenance,
    pub available: bool,
}

#[async_trait]
impl RankingProvider for ListProvider {
    async fn fetch_rankings(&self, query: &SearchQuery) -> Vec<String> {
        self.urls.iter().take(query.result_limit).cloned().collect()
    }

    fn provenance(&self) -> Provenance {
        self.provenance
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Every page has the same text
pub struct EchoFetcher(pub &'static str);

#[async_trait]
impl PageFetcher for EchoFetcher {
    async fn fetch_text(&self, _url: &str) -> String {
        self.0.to_string()
    }
}

pub fn context(urls: &[&str], page_text: &'static str, valueserp: bool) -> Arc<AppContext> {
    let primary = ListProvider {
        urls: urls.iter().map(|u| u.to_string()).collect(),
        provenance: Provenance::Ahrefs,
        available: true,
    };
    let fallback = ListProvider {
        urls: Vec::new(),
        provenance: Provenance::ValueSerp,
        available: valueserp,
    };

    Arc::new(AppContext::new(
        RankingResolver::new(Arc::new(primary), Arc::new(fallback)),
        Arc::new(EchoFetcher(page_text)),
        TermExtractor::pattern_only(),
        Duration::ZERO,
    ))
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
