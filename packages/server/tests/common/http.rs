//! HTTP client for integration testing.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`, no socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// Result of one request against the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `error` message of a failure body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// Send a GET to the router and decode the JSON body.
pub async fn get_json(app: &Router, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("non-JSON body ({}): {:?}", e, String::from_utf8_lossy(&bytes)));

    TestResponse { status, body }
}
