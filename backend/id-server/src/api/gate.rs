//! Token gate - the three-step check guarding identity routes.
//!
//! Extract the `x-auth-token` header, verify the signature, resolve
//! the subject to a stored user. Terminal on first failure. The same
//! check backs both the request extractor (distinguishable 401s) and
//! the tokenIsValid endpoint (collapsed to a boolean).

use crate::AppState;

use id_db::{DbError, UserRepository};

use axum::http::HeaderMap;
use uuid::Uuid;

/// Custom header carrying the bearer token. Existing clients send
/// this instead of the standard Authorization scheme.
pub const X_AUTH_TOKEN: &str = "x-auth-token";

/// A request admitted by the gate.
#[derive(Debug, Clone)]
pub struct Admitted {
    pub user_id: Uuid,
    /// Original token string, echoed back by the identity endpoint
    pub token: String,
}

/// Why the gate turned a request away.
///
/// The first three are unauthorized-class rejections; `Internal` is a
/// server fault (e.g. store unreachable) and must never be reported
/// as unauthenticated.
#[derive(Debug)]
pub enum GateRejection {
    NoToken,
    BadToken,
    UserNotFound,
    Internal(DbError),
}

/// Run the gate against the request headers.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Admitted, GateRejection> {
    // Step 1: extract
    let token = match headers.get(X_AUTH_TOKEN) {
        Some(value) => match value.to_str() {
            Ok(s) => s.to_string(),
            // Non-UTF8 header value can never be a token we issued
            Err(_) => return Err(GateRejection::BadToken),
        },
        None => return Err(GateRejection::NoToken),
    };

    // Step 2: verify signature and claims
    let claims = match state.verifier.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            log::debug!("Token verification failed: {}", e);
            return Err(GateRejection::BadToken);
        }
    };

    let user_id = match claims.user_id() {
        Ok(id) => id,
        Err(e) => {
            log::debug!("Token subject rejected: {}", e);
            return Err(GateRejection::BadToken);
        }
    };

    // Step 3: resolve the subject. A token for a deleted user is
    // invalid even though its signature verifies.
    let repo = UserRepository::new(state.pool.clone());
    match repo.find_by_id(user_id).await {
        Ok(Some(_)) => Ok(Admitted { user_id, token }),
        Ok(None) => Err(GateRejection::UserNotFound),
        Err(e) => Err(GateRejection::Internal(e)),
    }
}
