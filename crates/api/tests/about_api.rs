mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, expect_json, get, put_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn about_is_404_until_first_write(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/about").await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_creates_then_replaces_content(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(&app, "/api/v1/about", json!({"content": "First draft"})).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["content"], "First draft");
    assert_eq!(body["data"]["id"], 1);

    let response = put_json(&app, "/api/v1/about", json!({"content": "Second draft"})).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["content"], "Second draft");

    let body = expect_json(get(&app, "/api/v1/about").await, StatusCode::OK).await;
    assert_eq!(body["data"]["content"], "Second draft");
}
