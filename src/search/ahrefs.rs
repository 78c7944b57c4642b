// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ahrefs SERP overview provider
//!
//! Preferred ranking source. Requests the top positions for a keyword and
//! drops results classified solely as AI overviews.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::provider::RankingProvider;
use super::types::{Provenance, RankingError, SearchQuery};

const SELECT_FIELDS: &str = "position,url,title,type";
const AI_OVERVIEW_TYPE: &str = "ai_overview";

/// Ahrefs SERP overview provider
pub struct AhrefsProvider {
    api_key: String,
    api_url: String,
    timeout: Duration,
    client: Client,
}

impl AhrefsProvider {
    /// Create a new Ahrefs provider
    ///
    /// # Arguments
    /// * `api_key` - Ahrefs API key (empty means not configured)
    /// * `api_url` - SERP overview endpoint
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

    async fn request(&self, query: &SearchQuery) -> Result<AhrefsResponse, RankingError> {
        let profile = query.profile();
        let top_positions = query.result_limit.to_string();

        debug!(
            "Ahrefs request: keyword={} country={} top_positions={}",
            query.keyword, profile.gl, top_positions
        );

        let response = self
            .client
            .get(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .query(&[
                ("keyword", query.keyword.as_str()),
                ("country", profile.gl),
                ("select", SELECT_FIELDS),
                ("top_positions", top_positions.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RankingError::from_send(e, self.timeout.as_millis() as u64))?;

        let status = response.status();
        debug!("Ahrefs status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RankingError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<AhrefsResponse>()
            .await
            .map_err(|e| RankingError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl RankingProvider for AhrefsProvider {
    async fn fetch_rankings(&self, query: &SearchQuery) -> Vec<String> {
        info!("Fetching top pages from Ahrefs: {}", query.keyword);

        match self.request(query).await {
            Ok(response) => {
                let urls = collect_urls(response, query.result_limit);
                info!("Ahrefs returned {} urls", urls.len());
                urls
            }
            Err(e) => {
                warn!("Ahrefs lookup failed for '{}': {}", query.keyword, e);
                Vec::new()
            }
        }
    }

    fn provenance(&self) -> Provenance {
        Provenance::Ahrefs
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Keep positions with a URL that are not AI-overview only, in rank order
fn collect_urls(response: AhrefsResponse, limit: usize) -> Vec<String> {
    let mut urls = Vec::new();
    if limit == 0 {
        return urls;
    }

    for position in response.positions {
        let Some(url) = position.url else {
            continue;
        };

        if position.kind.as_ref().is_some_and(ResultTypes::is_ai_overview_only) {
            debug!("Skipping AI overview result: {}", url);
            continue;
        }

        urls.push(url);
        if urls.len() >= limit {
            break;
        }
    }

    urls
}

#[derive(Debug, Deserialize)]
struct AhrefsResponse {
    #[serde(default)]
    positions: Vec<AhrefsPosition>,
}

#[derive(Debug, Deserialize)]
struct AhrefsPosition {
    #[allow(dead_code)]
    position: Option<u32>,
    url: Option<String>,
    #[allow(dead_code)]
    title: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<ResultTypes>,
}

/// The `type` field arrives either as a single string or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultTypes {
    One(String),
    Many(Vec<String>),
}

impl ResultTypes {
    fn is_ai_overview_only(&self) -> bool {
        match self {
            ResultTypes::One(kind) => kind == AI_OVERVIEW_TYPE,
            ResultTypes::Many(kinds) => kinds.len() == 1 && kinds[0] == AI_OVERVIEW_TYPE,
        }
    }
}
