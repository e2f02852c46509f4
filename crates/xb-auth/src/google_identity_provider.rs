use crate::{AuthError, IdentityProvider, Result as AuthErrorResult};

use xb_core::ExternalIdentity;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use serde::Deserialize;

const DEFAULT_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Production identity provider: validates a client-obtained Google ID
/// token against the tokeninfo endpoint and maps the response to the
/// resolved identity shape.
pub struct GoogleIdentityProvider {
    http: reqwest::Client,
    tokeninfo_url: String,
    /// When set, the token's audience must match (our OAuth client id)
    client_id: Option<String>,
}

/// Subset of the tokeninfo response the resolver consumes
#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
    #[serde(default)]
    aud: Option<String>,
}

impl GoogleIdentityProvider {
    pub fn new(client_id: Option<String>) -> Self {
        Self::with_endpoint(DEFAULT_TOKENINFO_URL, client_id)
    }

    /// Endpoint override for tests and self-hosted mocks
    pub fn with_endpoint<S: Into<String>>(tokeninfo_url: S, client_id: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            tokeninfo_url: tokeninfo_url.into(),
            client_id,
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    async fn resolve(&self, id_token: &str) -> AuthErrorResult<ExternalIdentity> {
        let response = self
            .http
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AuthError::IdentityHttp {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !response.status().is_success() {
            warn!("Google tokeninfo rejected token: {}", response.status());
            return Err(AuthError::IdentityRejected {
                message: format!("tokeninfo returned {}", response.status()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let info: TokenInfo = response.json().await.map_err(|e| AuthError::IdentityHttp {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(ref expected) = self.client_id {
            if info.aud.as_deref() != Some(expected.as_str()) {
                warn!("Google ID token audience mismatch");
                return Err(AuthError::IdentityRejected {
                    message: "audience does not match configured client id".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let email = info.email.filter(|e| !e.is_empty()).ok_or_else(|| {
            AuthError::IdentityRejected {
                message: "token carries no email".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!("Resolved Google identity {}", info.sub);

        Ok(ExternalIdentity {
            external_id: info.sub,
            email,
            display_name: info.name,
            avatar_url: info.picture,
        })
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
