pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, me, signup, token_is_valid},
        login_request::LoginRequest,
        me_response::MeResponse,
        session_response::SessionResponse,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_token::AuthToken,
    gate::{Admitted, GateRejection, X_AUTH_TOKEN},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
