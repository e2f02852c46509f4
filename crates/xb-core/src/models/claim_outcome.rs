use serde::{Deserialize, Serialize};

/// Outcome of a claim attempt.
///
/// Expected business conditions (wrong state, missing record) are reported
/// as outcomes rather than raised as errors, so the caller layer decides
/// how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// The claimant now owns the address
    Claimed,
    /// A record exists but is no longer a floater
    AlreadyClaimed,
    /// No record for this address
    NotFound,
}

impl ClaimOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claimed => "claimed",
            Self::AlreadyClaimed => "already_claimed",
            Self::NotFound => "not_found",
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Claimed)
    }
}

impl std::fmt::Display for ClaimOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
