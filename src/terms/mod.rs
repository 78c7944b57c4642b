// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Japanese term extraction
//!
//! Turns fetched page texts into a ranked list of co-occurring terms,
//! using morphological segmentation when a dictionary is loaded and a
//! script-run pattern otherwise.

pub mod extractor;
pub mod segmenter;
pub mod stopwords;

pub use extractor::{Extraction, Strategy, TermExtractor, TermFrequency};
pub use segmenter::{load_segmenter, Segmenter, TokenizerConfig, TokenizerError, VibratoSegmenter};
