#![allow(dead_code)]

use id_core::User;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Builds a user without touching the database
pub fn test_user(email: &str) -> User {
    User::new(
        "Test User".to_string(),
        email.to_string(),
        // Fixed bcrypt hash; repository tests never verify passwords
        "$2b$04$wLx8pWSQEEfxrdmk8jJv1OZh2TCfS5E0qHJoCWqjZUn5PsEpSC6z6".to_string(),
    )
}
