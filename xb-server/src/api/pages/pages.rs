//! Page context handlers
//!
//! Public pages produce bare template contexts; the dashboard is gated and
//! joins in the caller's portal grants. HTML itself is the template
//! collaborator's job.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CurrentUser, DashboardResponse, PageContext, PortalGrantDto,
    ServicesResponse, StudioDto,
};

use xb_db::{ClientPortalRepository, UserRepository, VirtualStudioRepository};

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/pages/home
pub async fn home() -> Json<PageContext> {
    Json(PageContext::new("index.html"))
}

/// GET /api/v1/pages/about
pub async fn about() -> Json<PageContext> {
    Json(PageContext::new("about.html"))
}

/// GET /api/v1/pages/contact
pub async fn contact() -> Json<PageContext> {
    Json(PageContext::new("contact.html"))
}

/// GET /api/v1/pages/services
///
/// Public listing of active virtual studios
pub async fn services(State(state): State<AppState>) -> ApiResult<Json<ServicesResponse>> {
    let repo = VirtualStudioRepository::new(state.pool.clone());
    let studios = repo.find_active().await?;

    Ok(Json(ServicesResponse {
        template: "services.html",
        studios: studios.into_iter().map(StudioDto::from).collect(),
    }))
}

/// GET /api/v1/dashboard
///
/// The caller's dashboard context with their portal grants
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
) -> ApiResult<Json<DashboardResponse>> {
    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_external_id(&session.external_id)
        .await?
        .ok_or_else(ApiError::not_authenticated)?;

    let portals = ClientPortalRepository::new(state.pool.clone())
        .find_by_user(user.id)
        .await?;

    Ok(Json(DashboardResponse {
        template: "dashboard.html",
        user: user.into(),
        portals: portals.into_iter().map(PortalGrantDto::from).collect(),
    }))
}
