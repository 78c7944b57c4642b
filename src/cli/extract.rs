// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, bail, Result};
use clap::Args;
use tracing::info;

use crate::api::{ExtractApiResponse, ExtractFailureResponse, HealthResponse};
use crate::pipeline::{AppConfig, AppContext, CooccurrenceReport, ExtractionOutcome, ExtractionRequest};
use crate::search::{Country, ProviderSelection};

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Keyword to analyse
    pub keyword: String,

    /// Locale code (jp, us, uk, ca, au, de, fr, kr, cn)
    #[arg(long, default_value = "jp")]
    pub country: String,

    /// Number of ranking pages to analyse
    #[arg(long, default_value_t = 10)]
    pub top_pages: usize,

    /// Number of terms to report
    #[arg(long, default_value_t = 50)]
    pub top_words: usize,

    /// Ranking provider: ahrefs, valueserp or hybrid
    #[arg(long, default_value = "hybrid", value_parser = parse_selection)]
    pub use_api: ProviderSelection,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_selection(value: &str) -> Result<ProviderSelection, String> {
    match value.trim().to_lowercase().as_str() {
        "ahrefs" => Ok(ProviderSelection::Ahrefs),
        "valueserp" => Ok(ProviderSelection::ValueSerp),
        "hybrid" => Ok(ProviderSelection::Hybrid),
        other => Err(format!(
            "unknown provider '{}' (expected ahrefs, valueserp or hybrid)",
            other
        )),
    }
}

impl ExtractArgs {
    fn to_request(&self) -> Result<ExtractionRequest> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            bail!("keyword cannot be empty");
        }
        if self.top_pages == 0 || self.top_words == 0 {
            bail!("top-pages and top-words must be at least 1");
        }
        let country = Country::from_code(&self.country)
            .ok_or_else(|| anyhow!("unsupported country code: {}", self.country))?;

        Ok(ExtractionRequest::new(keyword)
            .with_country(country)
            .with_result_limit(self.top_pages)
            .with_top_n(self.top_words)
            .with_selection(self.use_api))
    }
}

fn build_context() -> Result<AppContext> {
    let config = AppConfig::from_env();
    Ok(AppContext::from_config(&config)?)
}

/// Run one extraction and print the report
pub async fn run_extract(args: ExtractArgs) -> Result<()> {
    let request = args.to_request()?;
    let context = build_context()?;

    info!("Extracting co-occurring terms for '{}'", request.keyword);

    match context.extract(&request).await {
        ExtractionOutcome::Completed(report) => {
            if args.json {
                let response = ExtractApiResponse::from(report);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_report(&report);
            }
            Ok(())
        }
        ExtractionOutcome::Failed(failure) => {
            if args.json {
                let response = ExtractFailureResponse::from(failure.clone());
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Err(anyhow!(
                "{} for '{}' (provider: {})",
                failure.reason,
                failure.keyword,
                failure.provenance
            ))
        }
    }
}

fn print_report(report: &CooccurrenceReport) {
    println!("Keyword:        {}", report.keyword);
    println!("Provider:       {}", report.provenance);
    println!("Strategy:       {}", report.strategy);
    println!(
        "Pages analysed: {}/{}",
        report.analyzed_pages,
        report.top_urls.len()
    );
    println!();
    for (rank, term) in report.terms.iter().enumerate() {
        println!("{:>4}. {} ({})", rank + 1, term.term, term.count);
    }
    println!();
    println!("{}", report.joined());
}

/// Print capability flags
pub fn show_status(args: StatusArgs) -> Result<()> {
    let context = build_context()?;
    let health = HealthResponse::from_context(&context);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        let flag = |on: bool| if on { "yes" } else { "no" };
        println!("Tokenizer available:       {}", flag(health.tokenizer_available));
        println!("Ahrefs API configured:     {}", flag(health.ahrefs_api_configured));
        println!("ValueSERP API configured:  {}", flag(health.valueserp_api_configured));
    }
    Ok(())
}
