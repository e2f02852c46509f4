use crate::UserDto;

use serde::Serialize;

/// Established session: bearer token plus the persisted user
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserDto,
}
