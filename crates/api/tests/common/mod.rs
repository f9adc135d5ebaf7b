//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! against the `#[sqlx::test]`-provided pool, and wraps `tower::oneshot`
//! request plumbing behind small get/post/put/delete helpers.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_storage::{ObjectStore, StorageConfig};

/// Server configuration used by tests. Kept out of the environment so tests
/// can run in parallel without cross-talk.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 5,
    }
}

/// Build the full application against a test pool.
///
/// The object store points at a non-routable endpoint; tests that would hit
/// storage (media upload, project images) exercise the error paths or avoid
/// the image field entirely.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let store = ObjectStore::new(&StorageConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        access_key_id: "test".to_string(),
        secret_access_key: "test".to_string(),
        bucket: "test-bucket".to_string(),
        public_url: "http://127.0.0.1:9/test-bucket".to_string(),
    });
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };
    build_app_router(state, &config)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::put(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a multipart form of text fields, as the admin editor submits projects.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let (content_type, body) = multipart_form(fields);
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// PUT variant of [`post_form`].
pub async fn put_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let (content_type, body) = multipart_form(fields);
    app.clone()
        .oneshot(
            Request::put(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn multipart_form(fields: &[(&str, &str)]) -> (String, Vec<u8>) {
    let boundary = "------------------------atelier-test-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the decoded body in one step.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
