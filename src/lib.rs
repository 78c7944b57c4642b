// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod pipeline;
pub mod search;
pub mod terms;
pub mod version;

pub use pipeline::{AppConfig, AppContext, CooccurrenceReport, ExtractionOutcome, ExtractionRequest};
pub use search::{Country, Provenance, ProviderSelection, RankingProvider, RankingResolver};
pub use terms::{TermExtractor, TermFrequency};
