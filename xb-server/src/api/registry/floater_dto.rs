use xb_core::{EmailRecord, EmailStatus};

use serde::Serialize;

/// Floater listing DTO
#[derive(Debug, Serialize)]
pub struct FloaterDto {
    pub email_address: String,
    pub status: EmailStatus,
    pub created_at: i64,
}

impl From<EmailRecord> for FloaterDto {
    fn from(r: EmailRecord) -> Self {
        Self {
            email_address: r.email_address,
            status: r.status,
            created_at: r.created_at.timestamp(),
        }
    }
}
