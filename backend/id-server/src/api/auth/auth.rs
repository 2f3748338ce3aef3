//! Authentication REST API handlers
//!
//! Signup, login, token validation, and the identity endpoint.

use crate::api::gate;
use crate::{
    ApiError, ApiResult, AppState, AuthToken, GateRejection, LoginRequest, MeResponse,
    SessionResponse, SignupRequest, UserDto,
};

use id_core::User;
use id_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/signup
///
/// Create a new account and issue a session token for it.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    // A body that fails deserialization gets the common {"msg"} 400
    let Json(body) = body?;
    validate_credentials(&body.email, &body.password)?;

    let repo = UserRepository::new(state.pool.clone());

    // Pre-check for a clean conflict message. The UNIQUE constraint
    // still catches the concurrent-signup race; From<DbError> maps
    // that violation to the same response.
    if repo.email_exists(&body.email).await? {
        return Err(ApiError::DuplicateEmail {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = state.hasher.hash(&body.password)?;
    let user = User::new(body.name, body.email, password_hash);
    repo.create(&user).await?;

    let token = state.issuer.issue(user.id)?;
    log::info!("User {} signed up", user.id);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            user: UserDto::from(user),
        }),
    ))
}

/// POST /auth/login
///
/// Verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(body) = body?;
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| ApiError::UnknownUser {
            location: ErrorLocation::from(Location::caller()),
        })?;

    // Unknown email and wrong password stay distinguishable on the
    // wire: existing clients switch on the two messages.
    if !state.hasher.verify(&body.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.issuer.issue(user.id)?;
    log::debug!("User {} logged in", user.id);

    Ok(Json(SessionResponse {
        token,
        user: UserDto::from(user),
    }))
}

/// POST /auth/tokenIsValid
///
/// Boolean variant of the token gate. Every failure mode collapses
/// to `false`; internal faults additionally set status 500.
pub async fn token_is_valid(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match gate::authenticate(&state, &headers).await {
        Ok(_) => (StatusCode::OK, Json(true)).into_response(),
        Err(GateRejection::Internal(e)) => {
            log::error!("tokenIsValid internal error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(false)).into_response()
        }
        Err(_) => (StatusCode::OK, Json(false)).into_response(),
    }
}

/// GET /auth/
///
/// Return the authenticated user together with the presented token.
pub async fn me(State(state): State<AppState>, AuthToken(admitted): AuthToken) -> ApiResult<Json<MeResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    // The gate resolved this id moments ago, but the user can vanish
    // in between; answer with the gate's not-found rejection.
    let user = repo
        .find_by_id(admitted.user_id)
        .await
        .map_err(|e| ApiError::from(GateRejection::Internal(e)))?
        .ok_or_else(|| ApiError::UserNotFound {
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(MeResponse {
        user: UserDto::from(user),
        token: admitted.token,
    }))
}

// =============================================================================
// Validation
// =============================================================================

fn validate_credentials(email: &str, password: &str) -> ApiResult<()> {
    if email.is_empty() {
        return Err(ApiError::Validation {
            message: "email must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if password.is_empty() {
        return Err(ApiError::Validation {
            message: "password must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
