//! REST API error types
//!
//! The wire shapes reproduce the contract existing clients depend on:
//! client-class failures are `{"msg": ...}` with 400/401, credential
//! route faults are `{"error": ...}` with 500, and faults on guarded
//! routes are a bare `false` with 500.

use crate::GateRejection;

use id_auth::AuthError;
use id_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;

pub const MSG_DUPLICATE_EMAIL: &str = "User with the same email already exists!";
pub const MSG_UNKNOWN_USER: &str = "User with this email does not exist!";
pub const MSG_WRONG_PASSWORD: &str = "Incorrect password.";
pub const MSG_NO_TOKEN: &str = "No auth token, access denied!";
pub const MSG_BAD_TOKEN: &str = "Token verification failed!";
pub const MSG_USER_NOT_FOUND: &str = "User not found!";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signup with an email that already has an account (400)
    #[error("Duplicate email {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Login with an email no account has (400)
    #[error("Unknown user {location}")]
    UnknownUser { location: ErrorLocation },

    /// Login with the wrong password (400)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Malformed or incomplete request body (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Guarded route called without the x-auth-token header (401)
    #[error("Missing auth token {location}")]
    NoToken { location: ErrorLocation },

    /// Token signature, expiry, or claims check failed (401)
    #[error("Token verification failed {location}")]
    BadToken { location: ErrorLocation },

    /// Token verified but its subject no longer exists (401)
    #[error("Token subject not found {location}")]
    UserNotFound { location: ErrorLocation },

    /// Internal server error on a credential route (500, `{"error"}`)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error behind the token gate (500, bare `false`)
    #[error("Internal error in token gate: {message} {location}")]
    GuardInternal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, msg) = match self {
            ApiError::DuplicateEmail { .. } => (StatusCode::BAD_REQUEST, MSG_DUPLICATE_EMAIL),
            ApiError::UnknownUser { .. } => (StatusCode::BAD_REQUEST, MSG_UNKNOWN_USER),
            ApiError::InvalidCredentials { .. } => (StatusCode::BAD_REQUEST, MSG_WRONG_PASSWORD),
            ApiError::Validation { ref message, .. } => {
                let body = json!({ "msg": message });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::NoToken { .. } => (StatusCode::UNAUTHORIZED, MSG_NO_TOKEN),
            ApiError::BadToken { .. } => (StatusCode::UNAUTHORIZED, MSG_BAD_TOKEN),
            ApiError::UserNotFound { .. } => (StatusCode::UNAUTHORIZED, MSG_USER_NOT_FOUND),
            ApiError::Internal { .. } => {
                // No internal detail leaks to the client
                let body = json!({ "error": "Internal server error" });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
            ApiError::GuardInternal { .. } => {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(false)).into_response();
            }
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // A unique violation on users.email is the pre-check race
        // resolving in the store; report it as the same conflict.
        if e.is_unique_violation() {
            return ApiError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            };
        }

        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
///
/// Only reached from hashing/issuance inside handlers; verification
/// failures are mapped by the token gate instead.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Auth error: {}", e);
        ApiError::Internal {
            message: "Credential processing failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body deserialization failures to API errors
///
/// A missing or malformed field answers with the same 400 `{"msg"}`
/// shape as the rest of the credential surface, not the extractor's
/// default plain-text rejection.
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(r: JsonRejection) -> Self {
        ApiError::Validation {
            message: r.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert token gate rejections to API errors
impl From<GateRejection> for ApiError {
    #[track_caller]
    fn from(r: GateRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match r {
            GateRejection::NoToken => ApiError::NoToken { location },
            GateRejection::BadToken => ApiError::BadToken { location },
            GateRejection::UserNotFound => ApiError::UserNotFound { location },
            GateRejection::Internal(e) => {
                log::error!("Token gate internal error: {}", e);
                ApiError::GuardInternal {
                    message: "Token gate failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
