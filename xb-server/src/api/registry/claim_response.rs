use xb_core::ClaimOutcome;

use serde::Serialize;

/// Discriminated claim outcome, surfaced to the caller as-is
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub email_address: String,
    pub outcome: ClaimOutcome,
    /// Issued on success only; there is no email delivery, so the claiming
    /// session is the only place the token ever appears
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
}
