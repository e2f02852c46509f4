//! Session API handlers
//!
//! Establishing a session is the one persisted write of the login path:
//! resolve the identity, upsert the user, mint the token.

use crate::{ApiError, ApiResult, CurrentUser, LoginRequest, SessionResponse, UserResponse};
use crate::state::AppState;

use xb_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/google
///
/// Establish a session from a provider-issued ID token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    if request.id_token.is_empty() {
        return Err(ApiError::validation(
            "id_token is required",
            Some("id_token"),
        ));
    }

    let identity = state.identity.resolve(&request.id_token).await?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.upsert_from_identity(&identity).await?;

    info!(
        "Login: {} via {} provider",
        user.external_id,
        state.identity.name()
    );

    let token = state.sessions.issue(&user.projection())?;

    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/v1/auth/me
///
/// The authenticated caller's persisted user record
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    // A valid token whose user vanished is a stale session, not a 404
    let user = repo
        .find_by_external_id(&session.external_id)
        .await?
        .ok_or_else(ApiError::not_authenticated)?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/auth/session
///
/// Clear the session. Tokens are stateless, so this has no persisted side
/// effect; the client discards its copy.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
