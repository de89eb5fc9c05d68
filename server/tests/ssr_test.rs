//! SSR integration tests
//!
//! These tests verify that server-side rendering works correctly
//! for every path without panicking.

#![recursion_limit = "512"]
#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use server_lib::{build_router, config::SiteConfig};
use tower::util::ServiceExt;

fn setup_test_app() -> Router {
    build_router(SiteConfig::default().leptos_options())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Test that the home page renders without panicking
#[tokio::test]
async fn test_home_page_ssr_no_panic() {
    let (status, html) = get("/").await;

    assert_eq!(status, StatusCode::OK, "Expected 200 OK for home page SSR");
    assert!(html.contains("Instructions to Selected Participants"));
}

#[tokio::test]
async fn test_home_page_sets_document_title() {
    let (_, html) = get("/").await;

    assert!(
        html.contains("Instructions to Selected Participants</title>"),
        "Should set the document title"
    );
    assert!(html.contains("name=\"description\""));
}

#[tokio::test]
async fn test_unknown_page_renders_fallback() {
    let (_, html) = get("/schedule").await;

    assert!(html.contains("Page not found."));
    assert!(!html.contains("Route Details"));
}

#[tokio::test]
async fn test_missing_bundle_asset_is_404() {
    let (status, _) = get("/pkg/does-not-exist.wasm").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
