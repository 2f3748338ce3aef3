use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_duplicate_email_returns_400_with_msg_body() {
    let error = ApiError::DuplicateEmail {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["msg"], "User with the same email already exists!");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_stay_distinguishable() {
    let unknown = ApiError::UnknownUser {
        location: ErrorLocation::from(Location::caller()),
    }
    .into_response();
    let wrong = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
    .into_response();

    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);

    let unknown_body = unknown.into_body().collect().await.unwrap().to_bytes();
    let wrong_body = wrong.into_body().collect().await.unwrap().to_bytes();
    let unknown_json: serde_json::Value = serde_json::from_slice(&unknown_body).unwrap();
    let wrong_json: serde_json::Value = serde_json::from_slice(&wrong_body).unwrap();

    assert_eq!(unknown_json["msg"], "User with this email does not exist!");
    assert_eq!(wrong_json["msg"], "Incorrect password.");
    assert_ne!(unknown_json["msg"], wrong_json["msg"]);
}

#[tokio::test]
async fn test_token_gate_rejections_return_401() {
    for (error, msg) in [
        (
            ApiError::NoToken {
                location: ErrorLocation::from(Location::caller()),
            },
            "No auth token, access denied!",
        ),
        (
            ApiError::BadToken {
                location: ErrorLocation::from(Location::caller()),
            },
            "Token verification failed!",
        ),
        (
            ApiError::UserNotFound {
                location: ErrorLocation::from(Location::caller()),
            },
            "User not found!",
        ),
    ] {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["msg"], msg);
    }
}

#[tokio::test]
async fn test_internal_error_returns_500_without_detail() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Internal detail stays server-side
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn test_guard_internal_returns_500_with_bare_false() {
    let error = ApiError::GuardInternal {
        message: "Token gate failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json, serde_json::Value::Bool(false));
}
