// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::pipeline::report::{DEFAULT_RESULT_LIMIT, DEFAULT_TOP_N};
use crate::pipeline::ExtractionRequest;
use crate::search::{Country, ProviderSelection};

pub const MAX_KEYWORD_CHARS: usize = 200;
pub const MAX_TOP_PAGES: usize = 100;
pub const MAX_TOP_WORDS: usize = 500;

/// Request body for POST /extract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractApiRequest {
    /// Keyword to analyse (required, max 200 chars)
    #[serde(default)]
    pub keyword: String,

    /// Locale code (default "jp" when absent or null; unknown codes resolve to jp)
    #[serde(default)]
    pub country: Option<Country>,

    /// Number of ranking pages to analyse (1-100, default 10)
    #[serde(default = "default_top_pages", alias = "result_limit")]
    pub top_pages: usize,

    /// Number of terms to return (1-500, default 50)
    #[serde(default = "default_top_words", alias = "top_n")]
    pub top_words: usize,

    /// "ahrefs", "valueserp" or "hybrid" (default when absent or null)
    #[serde(default, alias = "provider_selection")]
    pub use_api: Option<ProviderSelection>,
}

fn default_top_pages() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_top_words() -> usize {
    DEFAULT_TOP_N
}

impl ExtractApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), ApiError> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(ApiError::validation("keyword", "keyword is required"));
        }
        if keyword.chars().count() > MAX_KEYWORD_CHARS {
            return Err(ApiError::validation(
                "keyword",
                format!("keyword too long (max {} characters)", MAX_KEYWORD_CHARS),
            ));
        }
        if !(1..=MAX_TOP_PAGES).contains(&self.top_pages) {
            return Err(ApiError::validation(
                "top_pages",
                format!("top_pages must be between 1 and {}", MAX_TOP_PAGES),
            ));
        }
        if !(1..=MAX_TOP_WORDS).contains(&self.top_words) {
            return Err(ApiError::validation(
                "top_words",
                format!("top_words must be between 1 and {}", MAX_TOP_WORDS),
            ));
        }
        Ok(())
    }

    /// Convert into a pipeline request
    pub fn into_extraction(self) -> ExtractionRequest {
        ExtractionRequest::new(self.keyword.trim())
            .with_country(self.country.unwrap_or_default())
            .with_result_limit(self.top_pages)
            .with_top_n(self.top_words)
            .with_selection(self.use_api.unwrap_or_default())
    }
}
