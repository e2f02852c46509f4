use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_PROVIDER};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Which identity provider resolves logins: "google" or "static"
    pub provider: String,
    pub google_client_id: Option<String>,
    /// Tokeninfo endpoint override (tests, self-hosted mocks)
    pub tokeninfo_url: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: String::from(DEFAULT_IDENTITY_PROVIDER),
            google_client_id: None,
            tokeninfo_url: None,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.provider.as_str() {
            "static" => Ok(()),
            "google" => {
                if self.google_client_id.is_none() {
                    return Err(ConfigError::identity(
                        "identity.google_client_id is required when identity.provider is 'google'",
                    ));
                }
                Ok(())
            }
            other => Err(ConfigError::identity(format!(
                "identity.provider must be 'google' or 'static', got '{}'",
                other
            ))),
        }
    }

    pub fn is_google(&self) -> bool {
        self.provider == "google"
    }
}
