use serde::{Deserialize, Serialize};

/// Minimal projection of the authenticated user, bound for the lifetime of
/// one request. Gated operations take this explicitly; there is no ambient
/// current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub external_id: String,
    pub email: String,
    pub display_name: Option<String>,
}
