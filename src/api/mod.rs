// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod extract;
pub mod health;
pub mod server;

pub use errors::{ApiError, ErrorResponse};
pub use extract::{extract_handler, ExtractApiRequest, ExtractApiResponse, ExtractFailureResponse};
pub use health::{health_handler, HealthResponse};
pub use server::{create_app, serve, ServerConfig};
