use serde::{Deserialize, Serialize};

/// Outcome of a verification attempt on a claimed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Token matched before its deadline; the record is now `verified`
    Verified,
    /// Token matched but the deadline has passed
    Expired,
    /// The presented token does not match the issued one
    TokenMismatch,
    /// The record is not in `claimed` state
    WrongState,
    /// No record for this address
    NotFound,
}

impl VerificationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Expired => "expired",
            Self::TokenMismatch => "token_mismatch",
            Self::WrongState => "wrong_state",
            Self::NotFound => "not_found",
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
