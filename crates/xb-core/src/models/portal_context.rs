use crate::{PortalKind, SessionUser};

use serde::Serialize;

/// Rendering context for one portal view, scoped to the requesting user.
///
/// Produced only for an authenticated session; the HTML itself is the
/// template collaborator's job.
#[derive(Debug, Clone, Serialize)]
pub struct PortalContext {
    pub portal_type: String,
    pub template: String,
    pub user: SessionUser,
}

impl PortalContext {
    pub fn new(kind: &PortalKind, user: SessionUser) -> Self {
        Self {
            portal_type: kind.identifier().to_string(),
            template: kind.template().to_string(),
            user,
        }
    }
}
