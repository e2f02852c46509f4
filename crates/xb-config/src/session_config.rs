use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MIN_SESSION_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 signing secret. Unset = ephemeral random secret per process
    /// (sessions do not survive a restart).
    pub secret: Option<String>,
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.secret {
            if secret.len() < MIN_SESSION_SECRET_BYTES {
                return Err(ConfigError::session(format!(
                    "session.secret must be at least {} bytes",
                    MIN_SESSION_SECRET_BYTES
                )));
            }
        }

        if self.ttl_secs == 0 {
            return Err(ConfigError::session("session.ttl_secs must be > 0"));
        }

        Ok(())
    }
}
