use crate::StudioStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A virtual studio listed on the public services page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualStudio {
    pub id: Uuid,
    pub studio_name: String,
    pub studio_type: String,
    pub description: Option<String>,
    pub status: StudioStatus,
    pub created_at: DateTime<Utc>,
}

impl VirtualStudio {
    pub fn new(studio_name: String, studio_type: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            studio_name,
            studio_type,
            description: None,
            status: StudioStatus::Active,
            created_at: Utc::now(),
        }
    }
}
