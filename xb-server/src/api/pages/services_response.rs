use crate::StudioDto;

use serde::Serialize;

/// Services page context: the active studio listing
#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub template: &'static str,
    pub studios: Vec<StudioDto>,
}
