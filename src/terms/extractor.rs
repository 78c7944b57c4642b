// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Co-occurring term extraction
//!
//! Two strategies share one ranking step:
//! - Morphological: segment with the loaded dictionary, keep tokens of two
//!   or more characters containing Japanese script
//! - Pattern: collect runs of 2–4 Japanese-script characters
//!
//! Both drop stop words and tokens found inside the query keyword, then rank
//! by descending frequency with ties broken by first occurrence.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

use super::segmenter::Segmenter;
use super::stopwords::{is_common_stopword, is_stopword};

static SCRIPT_RUN: OnceLock<Regex> = OnceLock::new();
static KEYWORD_WORD: OnceLock<Regex> = OnceLock::new();

fn script_run() -> &'static Regex {
    SCRIPT_RUN.get_or_init(|| {
        Regex::new(r"[\x{4E00}-\x{9FFF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}]{2,4}")
            .expect("static pattern")
    })
}

fn keyword_word() -> &'static Regex {
    KEYWORD_WORD.get_or_init(|| Regex::new(r"\w+").expect("static pattern"))
}

/// Kanji, hiragana or katakana
fn is_japanese_char(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

/// Strategy that produced a term list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Morphological,
    Pattern,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Morphological => "morphological",
            Strategy::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A term and its occurrence count across the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

/// Ranked terms plus the strategy that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub terms: Vec<TermFrequency>,
    pub strategy: Strategy,
}

impl Extraction {
    /// Terms only, in rank order
    pub fn words(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.term.clone()).collect()
    }

    pub fn morphological_used(&self) -> bool {
        self.strategy == Strategy::Morphological
    }
}

/// Words of the query keyword; tokens contained in any of them are excluded
struct KeywordFilter {
    words: Vec<String>,
}

impl KeywordFilter {
    fn new(keyword: &str) -> Self {
        Self {
            words: keyword_word()
                .find_iter(keyword)
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }

    fn excludes(&self, token: &str) -> bool {
        self.words.iter().any(|w| w.contains(token))
    }
}

/// Extracts the most frequent co-occurring terms from page texts
#[derive(Clone)]
pub struct TermExtractor {
    segmenter: Option<Arc<dyn Segmenter>>,
}

impl TermExtractor {
    pub fn new(segmenter: Option<Arc<dyn Segmenter>>) -> Self {
        Self { segmenter }
    }

    /// Extractor without a segmenter
    pub fn pattern_only() -> Self {
        Self { segmenter: None }
    }

    /// Whether the morphological strategy is available
    pub fn is_morphological(&self) -> bool {
        self.segmenter.is_some()
    }

    /// Rank the `top_n` most frequent terms across `texts`
    ///
    /// Texts are concatenated in order with single spaces. A segmentation
    /// failure falls back to the pattern strategy for this call.
    pub fn extract(&self, texts: &[String], keyword: &str, top_n: usize) -> Extraction {
        let combined = texts.join(" ");
        let filter = KeywordFilter::new(keyword);

        if let Some(segmenter) = &self.segmenter {
            match segmenter.segment(&combined) {
                Ok(tokens) => {
                    let kept = tokens.into_iter().filter(|t| {
                        t.chars().count() >= 2
                            && t.chars().any(is_japanese_char)
                            && !is_stopword(t)
                            && !filter.excludes(t)
                    });
                    let terms = rank(kept, top_n);
                    debug!(
                        "{} ranked {} terms from {} chars",
                        segmenter.name(),
                        terms.len(),
                        combined.chars().count()
                    );
                    return Extraction {
                        terms,
                        strategy: Strategy::Morphological,
                    };
                }
                Err(e) => {
                    warn!(
                        "{} segmentation failed: {}, falling back to pattern extraction",
                        segmenter.name(),
                        e
                    );
                }
            }
        }

        let kept = script_run()
            .find_iter(&combined)
            .map(|m| m.as_str().to_string())
            .filter(|t| !is_common_stopword(t) && !filter.excludes(t));

        Extraction {
            terms: rank(kept, top_n),
            strategy: Strategy::Pattern,
        }
    }
}

impl fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermExtractor")
            .field("segmenter", &self.segmenter.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// Count tokens, order by descending count then first occurrence, keep `top_n`
fn rank(tokens: impl Iterator<Item = String>, top_n: usize) -> Vec<TermFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counted: Vec<TermFrequency> = Vec::new();

    for token in tokens {
        match index.get(&token) {
            Some(&i) => counted[i].count += 1,
            None => {
                index.insert(token.clone(), counted.len());
                counted.push(TermFrequency {
                    term: token,
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    counted.sort_by(|a, b| b.count.cmp(&a.count));
    counted.truncate(top_n);
    counted
}
