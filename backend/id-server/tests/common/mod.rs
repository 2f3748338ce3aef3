#![allow(dead_code)]

//! Test infrastructure for id-server API tests

use id_server::{AppState, X_AUTH_TOKEN};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // A single connection keeps every query on the same :memory: db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/id-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (minimum bcrypt cost keeps tests fast)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, TEST_SECRET.as_bytes(), 3600, 4)
}

/// POST a JSON body and collect the response
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Send a request with an optional x-auth-token header
pub async fn send_with_token(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(X_AUTH_TOKEN, token);
    }

    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Collect a response body as a raw string
pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Count rows in the users table
pub async fn user_count(pool: &SqlitePool) -> i64 {
    use sqlx::Row;

    sqlx::query("SELECT COUNT(*) AS n FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
        .try_get("n")
        .expect("Failed to read count")
}
