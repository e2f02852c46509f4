use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a registered email address.
///
/// `floater → claimed → verified` is the success path; `suspended` is
/// reachable from any state through the privileged admin transition only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    /// Registered but not yet claimed by any user
    #[default]
    Floater,
    /// Claimed by exactly one user, verification pending
    Claimed,
    /// Ownership confirmed (terminal)
    Verified,
    /// Administratively suspended (terminal)
    Suspended,
}

impl EmailStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Floater => "floater",
            Self::Claimed => "claimed",
            Self::Verified => "verified",
            Self::Suspended => "suspended",
        }
    }

    /// A claim request is honored only from `floater`
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Floater)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Suspended)
    }
}

impl FromStr for EmailStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "floater" => Ok(Self::Floater),
            "claimed" => Ok(Self::Claimed),
            "verified" => Ok(Self::Verified),
            "suspended" => Ok(Self::Suspended),
            _ => Err(CoreError::InvalidEmailStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
