pub mod auth;
pub mod login_request;
pub mod me_response;
pub mod session_response;
pub mod signup_request;
pub mod user_dto;
