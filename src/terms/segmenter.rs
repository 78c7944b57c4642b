// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Morphological segmentation capability
//!
//! The segmenter is optional: it is loaded once at startup from a vibrato
//! system dictionary, and its absence selects the pattern strategy.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use vibrato::{Dictionary, Tokenizer};

/// Longest run handed to the tokenizer in one call
const MAX_CHUNK_CHARS: usize = 4096;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Dictionary file could not be opened or decompressed
    #[error("Dictionary I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary contents were rejected
    #[error("Invalid dictionary: {0}")]
    Dictionary(String),

    /// Segmentation failed for an input
    #[error("Segmentation failed: {0}")]
    Segmentation(String),
}

/// Splits unsegmented text into word tokens
pub trait Segmenter: Send + Sync {
    /// Segment text into surface forms, in order
    fn segment(&self, text: &str) -> Result<Vec<String>, TokenizerError>;

    /// Segmenter name for logging
    fn name(&self) -> &'static str;
}

/// Configuration for the morphological tokenizer
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Path to a vibrato system dictionary (`.dic` or zstd-compressed `.dic.zst`)
    pub dictionary_path: Option<PathBuf>,
}

impl TokenizerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            dictionary_path: env::var("TOKENIZER_DICT_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Segmenter backed by the vibrato Viterbi tokenizer
pub struct VibratoSegmenter {
    tokenizer: Tokenizer,
}

impl VibratoSegmenter {
    /// Load a system dictionary from disk
    pub fn from_path(path: &Path) -> Result<Self, TokenizerError> {
        let file = File::open(path)?;
        let compressed = path.extension().is_some_and(|ext| ext == "zst");

        let dictionary = if compressed {
            Dictionary::read(zstd::Decoder::new(file)?)
        } else {
            Dictionary::read(BufReader::new(file))
        }
        .map_err(|e| TokenizerError::Dictionary(e.to_string()))?;

        Ok(Self::from_dictionary(dictionary))
    }

    /// Wrap an already-built dictionary
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(dictionary),
        }
    }
}

impl Segmenter for VibratoSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        let mut worker = self.tokenizer.new_worker();
        let mut tokens = Vec::new();

        for chunk in chunks(text) {
            worker.reset_sentence(chunk);
            worker.tokenize();
            tokens.extend(worker.token_iter().map(|t| t.surface().to_string()));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "vibrato"
    }
}

/// Split on whitespace, then bound each run to `MAX_CHUNK_CHARS`
fn chunks(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().flat_map(|word| {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut count = 0;
        for (idx, _) in word.char_indices() {
            if count == MAX_CHUNK_CHARS {
                pieces.push(&word[start..idx]);
                start = idx;
                count = 0;
            }
            count += 1;
        }
        pieces.push(&word[start..]);
        pieces
    })
}

/// Load the segmenter named by the configuration, if any
///
/// Returns `None` when no dictionary is configured or it fails to load;
/// callers then run the pattern strategy.
pub fn load_segmenter(config: &TokenizerConfig) -> Option<Arc<dyn Segmenter>> {
    let Some(path) = config.dictionary_path.as_deref() else {
        info!("No tokenizer dictionary configured, using pattern extraction");
        return None;
    };

    match VibratoSegmenter::from_path(path) {
        Ok(segmenter) => {
            info!("Tokenizer dictionary loaded from {}", path.display());
            Some(Arc::new(segmenter))
        }
        Err(e) => {
            warn!(
                "Tokenizer initialisation failed ({}): {}, using pattern extraction",
                path.display(),
                e
            );
            None
        }
    }
}
