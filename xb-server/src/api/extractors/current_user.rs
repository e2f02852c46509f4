//! Axum extractors for session-gated handlers

use crate::ApiError;
use crate::state::AppState;

use xb_core::SessionUser;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The Session Context's `current()`: extracts the authenticated caller's
/// projection from the bearer session token.
///
/// Rejection is the redirect-equivalent `NotAuthenticated` response, so no
/// gated handler can silently proceed with a null identity.
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(ApiError::not_authenticated)?;

            let token = header
                .strip_prefix("Bearer ")
                .ok_or_else(ApiError::not_authenticated)?;

            let claims = state.sessions.validate(token)?;
            log::debug!("Session bound for {}", claims.sub);

            Ok(CurrentUser(claims.projection()))
        }
    }
}
