// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Start-up configuration for the pipeline

use crate::search::{ContentFetchConfig, RankingConfig};
use crate::terms::TokenizerConfig;

/// Everything the pipeline needs, read once at start-up
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ranking: RankingConfig,
    pub content: ContentFetchConfig,
    pub tokenizer: TokenizerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            ranking: RankingConfig::from_env(),
            content: ContentFetchConfig::from_env(),
            tokenizer: TokenizerConfig::from_env(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.ranking.validate()?;
        self.content.validate()?;
        Ok(())
    }
}
