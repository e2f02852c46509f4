use std::sync::Arc;

use sqlx::SqlitePool;
use xb_auth::{IdentityProvider, SessionManager};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionManager>,
    pub identity: Arc<dyn IdentityProvider>,
    /// Shared secret gating the admin endpoints; None = disabled
    pub admin_token: Option<String>,
}
