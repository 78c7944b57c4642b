// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! In-process providers and fetcher for pipeline runs

use async_trait::async_trait;
use cooccur_node::pipeline::AppContext;
use cooccur_node::search::{
    PageFetcher, Provenance, RankingProvider, RankingResolver, SearchQuery,
};
use cooccur_node::terms::TermExtractor;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Provider returning a fixed list and counting calls
pub struct FakeProvider {
    urls: Vec<String>,
    provenance: Provenance,
    available: bool,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(provenance: Provenance, urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            provenance,
            available: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unconfigured(provenance: Provenance) -> Arc<Self> {
        Arc::new(Self {
            urls: Vec::new(),
            provenance,
            available: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankingProvider for FakeProvider {
    async fn fetch_rankings(&self, query: &SearchQuery) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Vec::new();
        }
        self.urls.iter().take(query.result_limit).cloned().collect()
    }

    fn provenance(&self) -> Provenance {
        self.provenance
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Fetcher serving page text from a map; unknown URLs fail
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    fetched: std::sync::Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(pages: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            pages: pages
                .iter()
                .map(|(u, t)| (u.to_string(), t.to_string()))
                .collect(),
            fetched: Default::default(),
        })
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_text(&self, url: &str) -> String {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().unwrap_or_default()
    }
}

pub fn context(
    primary: Arc<FakeProvider>,
    fallback: Arc<FakeProvider>,
    fetcher: Arc<FakeFetcher>,
    delay: Duration,
) -> AppContext {
    AppContext::new(
        RankingResolver::new(primary, fallback),
        fetcher,
        TermExtractor::pattern_only(),
        delay,
    )
}
