// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod extract;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Co-occurrence extraction CLI
#[derive(Parser, Debug)]
#[command(name = "cooccur-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Extract co-occurring terms for a keyword from top-ranking pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one extraction and print the report
    Extract(extract::ExtractArgs),

    /// Show tokenizer and provider availability
    Status(extract::StatusArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => extract::run_extract(args).await,
        Commands::Status(args) => extract::show_status(args),
    }
}
