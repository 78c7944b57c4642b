// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pipeline::AppContext;

/// Capability flags only; no credentials are exposed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub tokenizer_available: bool,
    pub ahrefs_api_configured: bool,
    pub valueserp_api_configured: bool,
}

impl HealthResponse {
    pub fn from_context(context: &AppContext) -> Self {
        Self {
            status: "ok".to_string(),
            tokenizer_available: context.tokenizer_available(),
            ahrefs_api_configured: context.ahrefs_configured(),
            valueserp_api_configured: context.valueserp_configured(),
        }
    }
}

/// GET /health
pub async fn health_handler(State(context): State<Arc<AppContext>>) -> Json<HealthResponse> {
    Json(HealthResponse::from_context(&context))
}
