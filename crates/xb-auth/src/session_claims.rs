use crate::{AuthError, Result as AuthErrorResult};

use xb_core::SessionUser;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims - carries exactly the session projection of the
/// authenticated user, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (external identity id)
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (external identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The request-scoped user projection these claims carry
    pub fn projection(&self) -> SessionUser {
        SessionUser {
            external_id: self.sub.clone(),
            email: self.email.clone(),
            display_name: self.name.clone(),
        }
    }
}
