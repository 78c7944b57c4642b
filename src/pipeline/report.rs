// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pipeline inputs and outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::{Country, Provenance, ProviderSelection};
use crate::terms::{Strategy, TermFrequency};

pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const DEFAULT_TOP_N: usize = 50;

/// One extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub keyword: String,
    pub country: Country,
    /// Number of ranking URLs to analyse
    pub result_limit: usize,
    /// Number of terms to report
    pub top_n: usize,
    pub selection: ProviderSelection,
}

impl ExtractionRequest {
    /// Request with default locale, limits and hybrid provider selection
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            country: Country::default(),
            result_limit: DEFAULT_RESULT_LIMIT,
            top_n: DEFAULT_TOP_N,
            selection: ProviderSelection::default(),
        }
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = country;
        self
    }

    pub fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_selection(mut self, selection: ProviderSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CooccurrenceReport {
    pub keyword: String,
    /// Ranked terms with their counts
    pub terms: Vec<TermFrequency>,
    /// Pages that yielded non-empty text
    pub analyzed_pages: usize,
    /// URLs attempted, in rank order
    pub top_urls: Vec<String>,
    pub strategy: Strategy,
    pub provenance: Provenance,
}

impl CooccurrenceReport {
    /// Terms only, in rank order
    pub fn words(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.term.clone()).collect()
    }

    /// Terms joined with ", "
    pub fn joined(&self) -> String {
        self.words().join(", ")
    }

    pub fn morphological_used(&self) -> bool {
        self.strategy == Strategy::Morphological
    }
}

/// Why a run produced no report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The resolver returned no URLs; nothing was fetched
    NoRankings,
    /// Every fetched page came back empty
    NoContent,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::NoRankings => "no_rankings",
            FailureReason::NoContent => "no_content",
        }
    }

    /// Human-readable message for callers
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::NoRankings => "Failed to fetch ranking URLs",
            FailureReason::NoContent => "Failed to fetch content",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Terminal failure of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub keyword: String,
    pub reason: FailureReason,
    pub provenance: Provenance,
    /// URLs attempted; empty for `NoRankings`
    pub top_urls: Vec<String>,
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Completed(CooccurrenceReport),
    Failed(FailureReport),
}

impl ExtractionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExtractionOutcome::Completed(_))
    }

    pub fn provenance(&self) -> Provenance {
        match self {
            ExtractionOutcome::Completed(report) => report.provenance,
            ExtractionOutcome::Failed(failure) => failure.provenance,
        }
    }
}
