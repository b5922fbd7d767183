//! Integration tests for web page acquisition against a local HTTP server

use axum::{http::StatusCode, response::Html, routing::get, Router};
use precis_acquire::{FetchError, WebFetcher};
use std::time::Duration;
use tokio::net::TcpListener;

const ARTICLE_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <title>Local article</title>
    <script>console.log("tracking");</script>
    <style>p { margin: 0; }</style>
  </head>
  <body>
    <nav>Home  About  Contact</nav>
    <p>Rust makes systems programming approachable.</p>
    <p>Ownership rules prevent data races at compile time.</p>
  </body>
</html>"#;

/// Start a server on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route("/empty", get(|| async { Html("<html><body></body></html>") }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_article_text() {
    let base = spawn_server().await;
    let fetcher = WebFetcher::new().unwrap();

    let text = fetcher.fetch_text(&format!("{}/article", base)).await.unwrap();

    assert!(text.contains("Rust makes systems programming approachable."));
    assert!(text.contains("Ownership rules prevent data races at compile time."));
    assert!(text.lines().any(|line| line == "About"));
    assert!(!text.contains("tracking"));
    assert!(!text.contains("margin"));
}

#[tokio::test]
async fn test_not_found_status() {
    let base = spawn_server().await;
    let fetcher = WebFetcher::new().unwrap();

    let err = fetcher.fetch_text(&format!("{}/missing", base)).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));
}

#[tokio::test]
async fn test_server_error_status() {
    let base = spawn_server().await;
    let fetcher = WebFetcher::new().unwrap();

    let err = fetcher.fetch_text(&format!("{}/broken", base)).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn test_page_without_text() {
    let base = spawn_server().await;
    let fetcher = WebFetcher::new().unwrap();

    let err = fetcher.fetch_text(&format!("{}/empty", base)).await.unwrap_err();
    assert!(matches!(err, FetchError::NoText(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = WebFetcher::with_timeout(Duration::from_secs(2)).unwrap();
    let err = fetcher.fetch_text(&format!("http://{}/", addr)).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_any_request() {
    let fetcher = WebFetcher::new().unwrap();
    let err = fetcher.fetch_text("not a url").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}
