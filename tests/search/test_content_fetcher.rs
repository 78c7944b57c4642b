// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Content fetching against local fixtures

use cooccur_node::search::{ContentFetchConfig, ContentFetcher, PageFetcher};
use std::time::Duration;

use super::support::silent_server;

const ARTICLE_PAGE: &str = r#"<html>
<head><title>焙煎ガイド</title><style>.x { color: red }</style></head>
<body>
  <header>サイト名</header>
  <nav>ホーム メニュー</nav>
  <article>
    <h1>コーヒー豆の焙煎</h1>
    <p>焙煎度合いで   味が変わります。</p>
    <script>var tracking = 1;</script>
  </article>
  <footer>著作権</footer>
</body>
</html>"#;

fn local_fetcher() -> ContentFetcher {
    let config = ContentFetchConfig {
        allow_private_hosts: true,
        ..ContentFetchConfig::default()
    };
    ContentFetcher::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_extracts_main_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/article")
        .match_header("user-agent", mockito::Matcher::Regex("^Mozilla/5.0".into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(ARTICLE_PAGE)
        .create_async()
        .await;

    let text = local_fetcher()
        .fetch_text(&format!("{}/article", server.url()))
        .await;

    mock.assert_async().await;
    assert_eq!(text, "コーヒー豆の焙煎 焙煎度合いで 味が変わります。");
}

#[tokio::test]
async fn test_meta_declared_shift_jis_decoded() {
    let page = r#"<html><head><meta charset="Shift_JIS"></head><body><article><p>焙煎と産地</p></article></body></html>"#;
    let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(page);

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sjis")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(&*encoded)
        .create_async()
        .await;

    let text = local_fetcher()
        .fetch_text(&format!("{}/sjis", server.url()))
        .await;

    assert!(text.contains("焙煎"), "got {:?}", text);
    assert_eq!(text, "焙煎と産地");
}

#[tokio::test]
async fn test_header_charset_wins_over_meta() {
    let page = r#"<html><head><meta charset="Shift_JIS"></head><body><main>産地の焙煎</main></body></html>"#;
    let (encoded, _, _) = encoding_rs::EUC_JP.encode(page);

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/eucjp")
        .with_status(200)
        .with_header("content-type", "text/html; charset=EUC-JP")
        .with_body(&*encoded)
        .create_async()
        .await;

    let text = local_fetcher()
        .fetch_text(&format!("{}/eucjp", server.url()))
        .await;

    assert_eq!(text, "産地の焙煎");
}

#[tokio::test]
async fn test_not_found_yields_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("<html><body>Not Found</body></html>")
        .create_async()
        .await;

    let text = local_fetcher()
        .fetch_text(&format!("{}/missing", server.url()))
        .await;
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_server_error_yields_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/broken")
        .with_status(500)
        .with_body("<html><body>Internal Server Error</body></html>")
        .create_async()
        .await;

    let text = local_fetcher()
        .fetch_text(&format!("{}/broken", server.url()))
        .await;
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_timeout_yields_empty() {
    let addr = silent_server().await;

    let started = std::time::Instant::now();
    let text = local_fetcher()
        .fetch_text_with_timeout(&format!("http://{}/slow", addr), Duration::from_millis(300))
        .await;

    assert!(text.is_empty());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_private_host_blocked_by_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/article")
        .with_status(200)
        .with_body(ARTICLE_PAGE)
        .expect(0)
        .create_async()
        .await;

    let fetcher = ContentFetcher::new(ContentFetchConfig::default()).unwrap();
    let text = fetcher.fetch_text(&format!("{}/article", server.url())).await;

    assert!(text.is_empty());
    mock.assert_async().await;
}
