// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Japanese stop words
//!
//! The pattern strategy uses the common set only; the morphological
//! strategy also drops single-character particles and auxiliaries that a
//! segmenter emits as separate tokens.

/// Demonstratives, formal nouns and auxiliaries
pub const COMMON_STOPWORDS: &[&str] = &[
    "こと", "ため", "もの", "これ", "それ", "あれ", "この", "その", "あの", "ここ", "そこ",
    "あそこ", "です", "ます", "ある", "いる", "なる", "する", "できる", "という", "として",
    "により", "について", "において", "に対して",
];

/// Particles and inflection endings
pub const PARTICLE_STOPWORDS: &[&str] = &[
    "の", "に", "を", "は", "が", "で", "と", "も", "から", "まで", "より", "へ", "や", "か",
    "ね", "よ", "な", "だ", "た", "て", "れ", "ば",
];

/// Stop-word filter for segmented tokens
pub fn is_stopword(token: &str) -> bool {
    COMMON_STOPWORDS.contains(&token) || PARTICLE_STOPWORDS.contains(&token)
}

/// Stop-word filter for pattern-extracted runs
pub fn is_common_stopword(token: &str) -> bool {
    COMMON_STOPWORDS.contains(&token)
}
