use id_auth::{PasswordHasher, TokenIssuer, TokenVerifier};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all request handlers.
///
/// Everything here is immutable after startup; per-request state
/// lives in extractors.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
    pub hasher: Arc<PasswordHasher>,
}

impl AppState {
    pub fn new(pool: SqlitePool, secret: &[u8], token_ttl_secs: i64, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            issuer: Arc::new(TokenIssuer::new(secret, token_ttl_secs)),
            verifier: Arc::new(TokenVerifier::new(secret)),
            hasher: Arc::new(PasswordHasher::new(bcrypt_cost)),
        }
    }
}
