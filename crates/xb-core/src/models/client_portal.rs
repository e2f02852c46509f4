use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A portal grant for one user, listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPortal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub portal_type: String,
    /// Opaque portal-specific payload, passed through to the renderer
    pub portal_data: Option<String>,
    pub access_level: String,
    pub created_at: DateTime<Utc>,
}

impl ClientPortal {
    pub fn new(user_id: Uuid, portal_type: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            portal_type,
            portal_data: None,
            access_level: "basic".to_string(),
            created_at: Utc::now(),
        }
    }
}
