// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ValueSERP search results provider
//!
//! Fallback ranking source. AI overview blocks are excluded server-side via
//! `include_ai_overview=false`; no client-side filtering is applied.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::provider::RankingProvider;
use super::types::{Provenance, RankingError, SearchQuery};

/// ValueSERP search provider
pub struct ValueSerpProvider {
    api_key: String,
    api_url: String,
    timeout: Duration,
    client: Client,
}

impl ValueSerpProvider {
    /// Create a new ValueSERP provider
    ///
    /// # Arguments
    /// * `api_key` - ValueSERP API key (empty means not configured)
    /// * `api_url` - Search endpoint
    /// * `timeout` - Request timeout
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, RankingError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            api_url,
            timeout,
            client,
        })
    }

    async fn request(&self, query: &SearchQuery) -> Result<ValueSerpResponse, RankingError> {
        let profile = query.profile();
        let num = query.result_limit.to_string();

        // Parameters are logged without the credential
        debug!(
            "ValueSERP request: q={} location={} google_domain={} gl={} hl={} num={}",
            query.keyword, profile.location, profile.google_domain, profile.gl, profile.hl, num
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", query.keyword.as_str()),
                ("location", profile.location),
                ("google_domain", profile.google_domain),
                ("gl", profile.gl),
                ("hl", profile.hl),
                ("output", "json"),
                ("num", num.as_str()),
                ("include_ai_overview", "false"),
            ])
            .send()
            .await
            .map_err(|e| RankingError::from_send(e, self.timeout.as_millis() as u64))?;

        let status = response.status();
        debug!("ValueSERP status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RankingError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ValueSerpResponse>()
            .await
            .map_err(|e| RankingError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl RankingProvider for ValueSerpProvider {
    async fn fetch_rankings(&self, query: &SearchQuery) -> Vec<String> {
        info!("Fetching top pages from ValueSERP: {}", query.keyword);

        let result = self
            .request(query)
            .await
            .and_then(|response| collect_urls(response, query.result_limit));

        match result {
            Ok(urls) => {
                if urls.is_empty() {
                    warn!("ValueSERP returned no results for '{}'", query.keyword);
                } else {
                    info!("ValueSERP returned {} urls", urls.len());
                }
                urls
            }
            Err(e) => {
                warn!("ValueSERP lookup failed for '{}': {}", query.keyword, e);
                Vec::new()
            }
        }
    }

    fn provenance(&self) -> Provenance {
        Provenance::ValueSerp
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Organic result links in rank order, only when the envelope reports success
fn collect_urls(response: ValueSerpResponse, limit: usize) -> Result<Vec<String>, RankingError> {
    let request_info = response.request_info.unwrap_or_default();
    if request_info.success != Some(true) {
        return Err(RankingError::Rejected(
            request_info
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    let Some(results) = response.organic_results else {
        warn!("ValueSERP response has no organic_results");
        return Ok(Vec::new());
    };

    Ok(results
        .into_iter()
        .filter_map(|r| r.link)
        .take(limit)
        .collect())
}

#[derive(Debug, Deserialize)]
struct ValueSerpResponse {
    request_info: Option<RequestInfo>,
    organic_results: Option<Vec<OrganicResult>>,
}

#[derive(Debug, Default, Deserialize)]
struct RequestInfo {
    success: Option<bool>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    link: Option<String>,
}
