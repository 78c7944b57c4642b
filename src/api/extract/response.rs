// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction API response types

use serde::{Deserialize, Serialize};

use crate::pipeline::{CooccurrenceReport, FailureReason, FailureReport};
use crate::search::Provenance;

/// A term and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Response body for a successful POST /extract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractApiResponse {
    pub keyword: String,
    /// Terms in rank order
    pub cooccurrence_words: Vec<String>,
    /// Terms joined with ", "
    pub cooccurrence_string: String,
    pub term_counts: Vec<TermCount>,
    pub analyzed_pages: usize,
    pub top_urls: Vec<String>,
    /// Whether morphological segmentation produced the terms
    pub tokenizer_used: bool,
    pub api_used: Provenance,
}

impl From<CooccurrenceReport> for ExtractApiResponse {
    fn from(report: CooccurrenceReport) -> Self {
        let cooccurrence_words = report.words();
        Self {
            cooccurrence_string: cooccurrence_words.join(", "),
            cooccurrence_words,
            tokenizer_used: report.morphological_used(),
            term_counts: report
                .terms
                .into_iter()
                .map(|t| TermCount {
                    term: t.term,
                    count: t.count,
                })
                .collect(),
            keyword: report.keyword,
            analyzed_pages: report.analyzed_pages,
            top_urls: report.top_urls,
            api_used: report.provenance,
        }
    }
}

/// Response body when a run ends without a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractFailureResponse {
    pub error: String,
    pub reason: FailureReason,
    pub keyword: String,
    pub cooccurrence_words: Vec<String>,
    pub analyzed_pages: usize,
    pub api_used: Provenance,
    pub top_urls: Vec<String>,
}

impl From<FailureReport> for ExtractFailureResponse {
    fn from(failure: FailureReport) -> Self {
        Self {
            error: failure.reason.message().to_string(),
            reason: failure.reason,
            keyword: failure.keyword,
            cooccurrence_words: Vec::new(),
            analyzed_pages: 0,
            api_used: failure.provenance,
            top_urls: failure.top_urls,
        }
    }
}
