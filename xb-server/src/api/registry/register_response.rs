use xb_core::EmailStatus;

use serde::Serialize;

/// Result of a registration: the record's status after the (idempotent) call
#[derive(Debug, Serialize)]
pub struct RegisterEntryResponse {
    pub email_address: String,
    pub status: EmailStatus,
}
