// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Co-occurrence extraction pipeline
//!
//! Drives one request strictly forward:
//!
//! ```text
//! keyword → RankingResolver → URLs → PageFetcher (throttled) → texts
//!         → TermExtractor → CooccurrenceReport
//! ```
//!
//! No state is shared between runs beyond the read-only [`AppContext`].

pub mod config;
pub mod context;
pub mod orchestrator;
pub mod report;

pub use config::AppConfig;
pub use context::{AppContext, ContextError};
pub use report::{
    CooccurrenceReport, ExtractionOutcome, ExtractionRequest, FailureReason, FailureReport,
};
