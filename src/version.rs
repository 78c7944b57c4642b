// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the co-occurrence extraction service

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-hybrid-rankings-2025-10-20";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-20";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "ahrefs-rankings",
    "valueserp-fallback",
    "morphological-segmentation",
    "pattern-extraction",
    "term-counts",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Cooccur Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
