// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ValueSERP provider against a local HTTP fixture

use cooccur_node::search::{Country, RankingProvider, SearchQuery, ValueSerpProvider};
use mockito::Matcher;
use std::time::Duration;

fn provider(base_url: &str) -> ValueSerpProvider {
    ValueSerpProvider::new(
        "valueserp-test-key".to_string(),
        format!("{}/search", base_url),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_request_parameters_and_links() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "valueserp-test-key".into()),
            Matcher::UrlEncoded("q".into(), "コーヒー 豆".into()),
            Matcher::UrlEncoded("location".into(), "Japan".into()),
            Matcher::UrlEncoded("google_domain".into(), "google.co.jp".into()),
            Matcher::UrlEncoded("gl".into(), "jp".into()),
            Matcher::UrlEncoded("hl".into(), "ja".into()),
            Matcher::UrlEncoded("output".into(), "json".into()),
            Matcher::UrlEncoded("num".into(), "2".into()),
            Matcher::UrlEncoded("include_ai_overview".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "request_info": {"success": true},
                "organic_results": [
                    {"position": 1, "link": "https://a.example/"},
                    {"position": 2},
                    {"position": 3, "link": "https://b.example/"},
                    {"position": 4, "link": "https://c.example/"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let query = SearchQuery::new("コーヒー 豆", Country::Jp, 2);
    let urls = provider(&server.url()).fetch_rankings(&query).await;

    mock.assert_async().await;
    assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
}

#[tokio::test]
async fn test_unsuccessful_envelope_yields_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "request_info": {"success": false, "message": "credits exhausted"},
                "organic_results": [{"link": "https://a.example/"}]
            }"#,
        )
        .create_async()
        .await;

    let query = SearchQuery::new("coffee", Country::Us, 10);
    assert!(provider(&server.url()).fetch_rankings(&query).await.is_empty());
}

#[tokio::test]
async fn test_missing_organic_results_yields_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"request_info": {"success": true}}"#)
        .create_async()
        .await;

    let query = SearchQuery::new("coffee", Country::Us, 10);
    assert!(provider(&server.url()).fetch_rankings(&query).await.is_empty());
}

#[tokio::test]
async fn test_error_status_yields_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let query = SearchQuery::new("coffee", Country::Us, 10);
    assert!(provider(&server.url()).fetch_rankings(&query).await.is_empty());
}

#[tokio::test]
async fn test_korean_profile_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("location".into(), "South Korea".into()),
            Matcher::UrlEncoded("google_domain".into(), "google.co.kr".into()),
            Matcher::UrlEncoded("hl".into(), "ko".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"request_info": {"success": true}, "organic_results": []}"#)
        .create_async()
        .await;

    let query = SearchQuery::new("커피", Country::Kr, 10);
    let urls = provider(&server.url()).fetch_rankings(&query).await;

    mock.assert_async().await;
    assert!(urls.is_empty());
}
