//! User entity - one row per resolved external identity.

use crate::{ExternalIdentity, SessionUser};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account, keyed internally by UUID and externally by the identity
/// provider's subject id. Created on first login, refreshed on every
/// subsequent one, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a freshly resolved identity
    pub fn from_identity(identity: &ExternalIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            external_id: identity.external_id.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            avatar_url: identity.avatar_url.clone(),
            created_at: now,
            last_login_at: now,
        }
    }

    /// The session-scoped projection of this user
    pub fn projection(&self) -> SessionUser {
        SessionUser {
            external_id: self.external_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}
