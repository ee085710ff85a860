//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use lang_portal::adapters::{app, AppState, Database};
use lang_portal::config::ServerConfig;

/// In-memory database seeded with one group (id 1, "Test Group") and one
/// activity (id 1, "Test Activity").
pub async fn seeded_database() -> Database {
    let database = Database::in_memory().await.expect("in-memory database");

    sqlx::query("INSERT INTO groups (id, name) VALUES (1, 'Test Group')")
        .execute(database.pool())
        .await
        .expect("seed group");
    sqlx::query(
        "INSERT INTO study_activities (id, name, url, preview_url) \
         VALUES (1, 'Test Activity', 'http://test.com', 'http://test.com/preview')",
    )
    .execute(database.pool())
    .await
    .expect("seed activity");

    database
}

pub fn router(database: &Database) -> Router {
    app(
        AppState::from_database(database.clone()),
        &ServerConfig::default(),
    )
}

pub async fn count_rows(database: &Database, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(database.pool())
        .await
        .expect("count rows");
    count
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).expect("request")).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("request");
    send(router, request).await
}
