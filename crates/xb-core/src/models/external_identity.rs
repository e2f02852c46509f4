use serde::{Deserialize, Serialize};

/// Output shape of the identity resolution boundary.
///
/// The OAuth handshake happens outside this system; everything downstream
/// consumes only this resolved form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Stable subject identifier issued by the provider
    pub external_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}
