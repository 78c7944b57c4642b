// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Terminal failure outcomes

use cooccur_node::pipeline::{ExtractionOutcome, ExtractionRequest, FailureReason};
use cooccur_node::search::{Provenance, ProviderSelection};
use std::time::Duration;

use super::support::{context, FakeFetcher, FakeProvider};

#[tokio::test]
async fn test_primary_empty_and_fallback_unconfigured() {
    let primary = FakeProvider::new(Provenance::Ahrefs, &[]);
    let fallback = FakeProvider::unconfigured(Provenance::ValueSerp);
    let fetcher = FakeFetcher::new(&[]);
    let context = context(primary.clone(), fallback.clone(), fetcher.clone(), Duration::ZERO);

    let ExtractionOutcome::Failed(failure) =
        context.extract(&ExtractionRequest::new("コーヒー 豆")).await
    else {
        panic!("expected a failure");
    };

    assert_eq!(failure.reason, FailureReason::NoRankings);
    assert_eq!(failure.provenance, Provenance::None);
    assert!(failure.top_urls.is_empty());
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 0);
    assert!(fetcher.fetched().is_empty());
}

#[tokio::test]
async fn test_no_providers_configured() {
    let primary = FakeProvider::unconfigured(Provenance::Ahrefs);
    let fallback = FakeProvider::unconfigured(Provenance::ValueSerp);
    let context = context(primary.clone(), fallback.clone(), FakeFetcher::new(&[]), Duration::ZERO);

    let outcome = context.extract(&ExtractionRequest::new("コーヒー")).await;

    assert!(!outcome.is_completed());
    assert_eq!(outcome.provenance(), Provenance::None);
    assert_eq!(primary.calls(), 0);
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn test_single_provider_unconfigured_keeps_tag() {
    let primary = FakeProvider::unconfigured(Provenance::Ahrefs);
    let fallback = FakeProvider::new(Provenance::ValueSerp, &["https://v.example/"]);
    let context = context(primary.clone(), fallback.clone(), FakeFetcher::new(&[]), Duration::ZERO);

    let request = ExtractionRequest::new("コーヒー").with_selection(ProviderSelection::Ahrefs);
    let ExtractionOutcome::Failed(failure) = context.extract(&request).await else {
        panic!("expected a failure");
    };

    assert_eq!(failure.reason, FailureReason::NoRankings);
    assert_eq!(failure.provenance, Provenance::Ahrefs);
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn test_all_fetches_fail() {
    let urls = ["https://a.example/", "https://b.example/"];
    let primary = FakeProvider::new(Provenance::Ahrefs, &urls);
    let fallback = FakeProvider::unconfigured(Provenance::ValueSerp);
    let fetcher = FakeFetcher::new(&[]);
    let context = context(primary, fallback, fetcher.clone(), Duration::ZERO);

    let ExtractionOutcome::Failed(failure) =
        context.extract(&ExtractionRequest::new("コーヒー")).await
    else {
        panic!("expected a failure");
    };

    assert_eq!(failure.reason, FailureReason::NoContent);
    assert_eq!(failure.provenance, Provenance::Ahrefs);
    assert_eq!(failure.top_urls, urls);
    assert_eq!(fetcher.fetched(), urls);
}
