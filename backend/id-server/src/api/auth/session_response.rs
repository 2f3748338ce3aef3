use crate::UserDto;

use serde::Serialize;

/// Signup and login response: the issued token plus the user's
/// public fields at the top level.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: UserDto,
}
