use xb_core::VirtualStudio;

use serde::Serialize;

/// Virtual studio DTO for the services page
#[derive(Debug, Serialize)]
pub struct StudioDto {
    pub studio_name: String,
    pub studio_type: String,
    pub description: Option<String>,
}

impl From<VirtualStudio> for StudioDto {
    fn from(s: VirtualStudio) -> Self {
        Self {
            studio_name: s.studio_name,
            studio_type: s.studio_type,
            description: s.description,
        }
    }
}
