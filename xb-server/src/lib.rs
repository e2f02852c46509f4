pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, me},
        login_request::LoginRequest,
        session_response::SessionResponse,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    pages::{
        dashboard_response::DashboardResponse,
        page_context::PageContext,
        pages::{about, contact, dashboard, home, services},
        portal_grant_dto::PortalGrantDto,
        services_response::ServicesResponse,
        studio_dto::StudioDto,
    },
    portals::portals::show_portal,
    registry::{
        claim_request::ClaimRequest,
        claim_response::ClaimResponse,
        floater_dto::FloaterDto,
        floater_list_response::FloaterListResponse,
        register_request::RegisterEntryRequest,
        register_response::RegisterEntryResponse,
        registry::{claim_entry, list_floaters, register_entry, verify_entry},
        verify_request::VerifyRequest,
        verify_response::VerifyResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
