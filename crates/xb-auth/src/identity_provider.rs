use crate::Result as AuthErrorResult;

use xb_core::ExternalIdentity;

use async_trait::async_trait;

/// The identity resolution boundary.
///
/// Implementations turn a provider-issued credential (an ID token the
/// browser obtained during its own OAuth handshake) into a stable external
/// identity. The core consumes only the resolved shape and never performs
/// the handshake itself.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, id_token: &str) -> AuthErrorResult<ExternalIdentity>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}
