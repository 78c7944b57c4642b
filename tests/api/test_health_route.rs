// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /health

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use cooccur_node::api::create_app;
use tower::util::ServiceExt; // for `oneshot`

use super::support::{context, json_body};

#[tokio::test]
async fn test_health_reports_capabilities() {
    let app = create_app(context(&[], "", false));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["tokenizer_available"], false);
    assert_eq!(json["ahrefs_api_configured"], true);
    assert_eq!(json["valueserp_api_configured"], false);
    assert_eq!(json.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = create_app(context(&[], "", true));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("origin", "https://tool.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = create_app(context(&[], "", true));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/search")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
