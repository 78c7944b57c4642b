// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction API endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::request::ExtractApiRequest;
use super::response::{ExtractApiResponse, ExtractFailureResponse};
use crate::api::errors::ApiError;
use crate::pipeline::{AppContext, ExtractionOutcome};

/// POST /extract - Extract co-occurring terms for a keyword
///
/// # Request
/// - `keyword`: Keyword to analyse (required, max 200 chars)
/// - `country`: Locale code (default "jp")
/// - `top_pages`: Ranking pages to analyse (1-100, default 10)
/// - `top_words`: Terms to return (1-500, default 50)
/// - `use_api`: "ahrefs", "valueserp" or "hybrid" (default)
///
/// # Response
/// - `cooccurrence_words`, `cooccurrence_string`, `term_counts`
/// - `analyzed_pages`, `top_urls`, `tokenizer_used`, `api_used`
///
/// # Errors
/// - 400 Bad Request: Malformed JSON or invalid parameters
/// - 500 Internal Server Error: No ranking URLs or no page content
pub async fn extract_handler(
    State(context): State<Arc<AppContext>>,
    payload: Result<Json<ExtractApiRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    debug!("Extract request: {:?}", request.keyword);

    if let Err(e) = request.validate() {
        warn!("Extract validation failed: {}", e);
        return Err(e);
    }

    let outcome = context.extract(&request.into_extraction()).await;

    Ok(match outcome {
        ExtractionOutcome::Completed(report) => {
            info!(
                "Extract complete: {} terms for '{}' ({} pages)",
                report.terms.len(),
                report.keyword,
                report.analyzed_pages
            );
            Json(ExtractApiResponse::from(report)).into_response()
        }
        ExtractionOutcome::Failed(failure) => {
            warn!("Extract failed for '{}': {}", failure.keyword, failure.reason);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExtractFailureResponse::from(failure)),
            )
                .into_response()
        }
    })
}
