use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name (required)
    pub name: String,

    /// Unique account email, compared exact-match (required)
    pub email: String,

    /// Plaintext password, hashed before storage (required)
    pub password: String,
}
