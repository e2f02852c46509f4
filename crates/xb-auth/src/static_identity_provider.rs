use crate::{IdentityProvider, Result as AuthErrorResult};

use xb_core::ExternalIdentity;

use async_trait::async_trait;
use log::debug;

/// Development/test identity provider: resolves every credential to one
/// configured identity. Selected through configuration, never hardcoded
/// into a handler.
pub struct StaticIdentityProvider {
    identity: ExternalIdentity,
}

impl StaticIdentityProvider {
    pub fn new(identity: ExternalIdentity) -> Self {
        Self { identity }
    }
}

impl Default for StaticIdentityProvider {
    fn default() -> Self {
        Self::new(ExternalIdentity {
            external_id: "temp_user_123".to_string(),
            email: "test@example.com".to_string(),
            display_name: Some("Test User".to_string()),
            avatar_url: None,
        })
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve(&self, _id_token: &str) -> AuthErrorResult<ExternalIdentity> {
        debug!("Static identity provider resolved {}", self.identity.external_id);
        Ok(self.identity.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
