// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use cooccur_node::{
    api::{serve, ServerConfig},
    pipeline::{AppConfig, AppContext},
    version,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting co-occurrence extraction server...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!("✨ Features: {}", version::FEATURES.join(", "));
    println!();

    let config = AppConfig::from_env();
    let server_config = ServerConfig::from_env();
    server_config.validate().map_err(anyhow::Error::msg)?;

    let context = Arc::new(AppContext::from_config(&config)?);
    context.log_startup_banner();

    serve(&server_config, context).await
}
