//! Content fetching module
//!
//! Fetches page text from ranking URLs for term extraction.
//!
//! ## Architecture
//!
//! ```text
//! Ranked URLs → ContentFetcher → HTML → extract_main_content → Clean Text
//!                     ↑
//!               FetchThrottle (fixed spacing between fetches)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = ContentFetchConfig::from_env();
//! let fetcher = ContentFetcher::new(config)?;
//!
//! // Empty string on any failure
//! let text = fetcher.fetch_text("https://example.com").await;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ContentFetchConfig;
pub use extractor::extract_main_content;
pub use fetcher::{ContentFetcher, FetchError, PageFetcher};
