use id_core::User;

use serde::Serialize;

/// User DTO for JSON serialization.
///
/// Built field-by-field from the entity; the password hash has no
/// field here, so it cannot leak into any response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
            created_at: u.created_at.timestamp(),
        }
    }
}
