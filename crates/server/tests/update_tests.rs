//! Integration tests for the client self-update endpoint.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::TestServer;
use common::fixtures::DEPLOYED_PEER;
use serde_json::json;
use signcast_core::Fingerprint;
use tower::ServiceExt;

async fn post_update(
    server: &TestServer,
    body: serde_json::Value,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/update")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = server
        .router_as(DEPLOYED_PEER)
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, bytes)
}

#[tokio::test]
async fn outdated_client_receives_binary() {
    let server = TestServer::new().await;

    // An old build: different fingerprint, mtime far in the past.
    let report = json!({
        "sha256sum": Fingerprint::compute(b"old-client-binary").to_hex(),
        "mtime": 1_500_000_000,
    });
    let (status, body) = post_update(&server, report).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, server.update_binary());
}

#[tokio::test]
async fn up_to_date_client_gets_no_content() {
    let server = TestServer::new().await;

    // Same fingerprint as the served binary: never an update, regardless of
    // the reported mtime.
    let report = json!({
        "sha256sum": Fingerprint::compute(&server.update_binary()).to_hex(),
        "mtime": 0,
    });
    let (status, body) = post_update(&server, report).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn client_from_the_future_gets_no_content() {
    let server = TestServer::new().await;

    // Different fingerprint but a later mtime than the server's binary.
    let report = json!({
        "sha256sum": Fingerprint::compute(b"experimental-build").to_hex(),
        "mtime": 4_000_000_000u64,
    });
    let (status, _) = post_update(&server, report).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn invalid_fingerprint_is_bad_request() {
    let server = TestServer::new().await;

    let report = json!({ "sha256sum": "not-hex", "mtime": 1_500_000_000 });
    let (status, _) = post_update(&server, report).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_update_path_is_internal_error() {
    let server = TestServer::without_update().await;

    let report = json!({
        "sha256sum": Fingerprint::compute(b"old").to_hex(),
        "mtime": 1_500_000_000,
    });
    let (status, _) = post_update(&server, report).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
