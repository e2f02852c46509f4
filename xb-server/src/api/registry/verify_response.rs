use xb_core::VerificationOutcome;

use serde::Serialize;

/// Discriminated verification outcome
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub email_address: String,
    pub outcome: VerificationOutcome,
}
