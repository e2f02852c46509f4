use crate::FloaterDto;

use serde::Serialize;

/// List of floater records response
#[derive(Debug, Serialize)]
pub struct FloaterListResponse {
    pub floaters: Vec<FloaterDto>,
}
