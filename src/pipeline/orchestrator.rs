// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sequential extraction run

use std::time::Instant;
use tracing::{debug, info, warn};

use super::context::AppContext;
use super::report::{
    CooccurrenceReport, ExtractionOutcome, ExtractionRequest, FailureReason, FailureReport,
};
use crate::search::{FetchThrottle, SearchQuery};

/// Terms listed in the completion log
const SUMMARY_TERMS: usize = 20;

impl AppContext {
    /// Run one extraction: resolve rankings, fetch pages in rank order, rank terms
    ///
    /// Never returns an error; terminal conditions become
    /// [`ExtractionOutcome::Failed`].
    pub async fn extract(&self, request: &ExtractionRequest) -> ExtractionOutcome {
        let start = Instant::now();
        let query = SearchQuery::new(
            request.keyword.clone(),
            request.country,
            request.result_limit,
        );

        info!(
            "Extraction started: keyword='{}' country={} pages={} words={} provider={:?}",
            query.keyword, query.country, request.result_limit, request.top_n, request.selection
        );

        let rankings = self.resolver.resolve(request.selection, &query).await;
        if rankings.is_empty() {
            warn!(
                "No ranking URLs for '{}' (provider: {})",
                query.keyword, rankings.provenance
            );
            return ExtractionOutcome::Failed(FailureReport {
                keyword: query.keyword,
                reason: FailureReason::NoRankings,
                provenance: rankings.provenance,
                top_urls: Vec::new(),
            });
        }

        let throttle = FetchThrottle::new(self.fetch_delay);
        let total = rankings.urls.len();
        let mut texts = Vec::with_capacity(total);

        for (i, url) in rankings.urls.iter().enumerate() {
            throttle.wait().await;
            debug!("Fetching page {}/{}: {}", i + 1, total, url);

            let text = self.fetcher.fetch_text(url).await;
            if text.trim().is_empty() {
                debug!("No content from {}", url);
                continue;
            }
            texts.push(text);
        }

        if texts.is_empty() {
            warn!("No page content for '{}' from {} urls", query.keyword, total);
            return ExtractionOutcome::Failed(FailureReport {
                keyword: query.keyword,
                reason: FailureReason::NoContent,
                provenance: rankings.provenance,
                top_urls: rankings.urls,
            });
        }

        let extraction = self.extractor.extract(&texts, &query.keyword, request.top_n);

        info!(
            "Extraction complete: {} terms from {}/{} pages via {} ({}) in {}ms",
            extraction.terms.len(),
            texts.len(),
            total,
            rankings.provenance,
            extraction.strategy,
            start.elapsed().as_millis()
        );
        for (rank, term) in extraction.terms.iter().take(SUMMARY_TERMS).enumerate() {
            info!("  {:>2}. {} ({})", rank + 1, term.term, term.count);
        }

        ExtractionOutcome::Completed(CooccurrenceReport {
            keyword: query.keyword,
            terms: extraction.terms,
            analyzed_pages: texts.len(),
            top_urls: rankings.urls,
            strategy: extraction.strategy,
            provenance: rankings.provenance,
        })
    }
}
