//! Email registry entry - one row per registered address.

use crate::EmailStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered email address and its claim state.
///
/// Invariants: `floater` rows carry no claimant and no claim timestamp;
/// `claimed` and `verified` rows carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: Uuid,
    pub email_address: String,
    pub status: EmailStatus,
    pub claimed_by: Option<Uuid>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub verification_token: Option<String>,
    pub verification_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmailRecord {
    /// Create a fresh, unclaimed record
    pub fn floater(email_address: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email_address,
            status: EmailStatus::Floater,
            claimed_by: None,
            claimed_at: None,
            verification_token: None,
            verification_expires: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_floater(&self) -> bool {
        self.status == EmailStatus::Floater
    }
}
