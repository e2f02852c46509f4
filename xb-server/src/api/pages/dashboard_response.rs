use crate::{PortalGrantDto, UserDto};

use serde::Serialize;

/// Dashboard context: the caller plus their portal grants
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub template: &'static str,
    pub user: UserDto,
    pub portals: Vec<PortalGrantDto>,
}
