//! Portal dispatch handler
//!
//! Every portal kind, present or future, passes through the same session
//! gate before any context is produced.

use crate::CurrentUser;

use xb_core::{PortalContext, PortalKind};

use axum::{Json, extract::Path};
use log::debug;

/// GET /api/v1/portals/{portal_type}
///
/// Map the identifier onto a rendering context for the caller. Unknown
/// identifiers dispatch to the generic portal, not an error.
pub async fn show_portal(
    CurrentUser(session): CurrentUser,
    Path(portal_type): Path<String>,
) -> Json<PortalContext> {
    let kind = PortalKind::from_identifier(&portal_type);

    if kind.is_generic() {
        debug!("Generic portal context for '{}'", portal_type);
    }

    Json(PortalContext::new(&kind, session))
}
