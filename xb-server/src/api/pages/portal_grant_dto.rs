use xb_core::ClientPortal;

use serde::Serialize;

/// Portal grant DTO for the dashboard listing
#[derive(Debug, Serialize)]
pub struct PortalGrantDto {
    pub portal_type: String,
    pub access_level: String,
    pub portal_data: Option<String>,
}

impl From<ClientPortal> for PortalGrantDto {
    fn from(p: ClientPortal) -> Self {
        Self {
            portal_type: p.portal_type,
            access_level: p.access_level,
            portal_data: p.portal_data,
        }
    }
}
