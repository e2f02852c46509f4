//! Administrative endpoints for server management.
//!
//! All of them require the configured admin token; with no token configured
//! they report not-found, as if the routes did not exist.

use crate::state::AppState;
use crate::{ApiError, ApiResult};

use xb_db::EmailRegistryRepository;

use axum::{Json, extract::State, http::HeaderMap};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SuspendRequest {
    pub email_address: String,
}

#[derive(Debug, Serialize)]
pub struct SuspendResponse {
    pub email_address: String,
    pub status: String,
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> ApiResult<()> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Err(ApiError::not_found("admin endpoints are disabled"));
    };

    match headers.get("x-admin-token").and_then(|v| v.to_str().ok()) {
        Some(token) if token == expected => Ok(()),
        _ => Err(ApiError::not_authenticated()),
    }
}

/// POST /admin/checkpoint
///
/// Checkpoint WAL to the main database file, ensuring durability before
/// shutdown or backup.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<CheckpointResponse>> {
    require_admin(&state, &headers)?;

    info!("Manual checkpoint requested");

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&state.pool)
        .await?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}

/// POST /admin/registry/suspensions
///
/// The privileged registry transition: any state -> suspended. Deliberately
/// outside the user-facing claim operations.
pub async fn suspend_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SuspendRequest>,
) -> ApiResult<Json<SuspendResponse>> {
    require_admin(&state, &headers)?;

    let repo = EmailRegistryRepository::new(state.pool.clone());
    let found = repo.suspend(&request.email_address).await?;

    if !found {
        return Err(ApiError::not_found(format!(
            "No registry entry for {}",
            request.email_address
        )));
    }

    info!("Suspended registry entry {}", request.email_address);

    Ok(Json(SuspendResponse {
        email_address: request.email_address,
        status: "suspended".to_string(),
    }))
}
