use crate::UserDto;

use serde::Serialize;

/// Identity endpoint response: the user's public fields plus the
/// token the request presented.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
}
