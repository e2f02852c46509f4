//! Email registry REST API handlers
//!
//! Registration and claiming surface discriminated outcomes; only storage
//! failures become hard errors. Format checking happens here, at the
//! boundary - the repository trusts its input.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, ClaimRequest, ClaimResponse, CurrentUser, FloaterDto,
    FloaterListResponse, RegisterEntryRequest, RegisterEntryResponse, VerifyRequest,
    VerifyResponse,
};

use xb_db::{EmailRegistryRepository, UserRepository};

use axum::{Json, extract::State};
use log::info;

/// RFC 5321 upper bound; anything longer is garbage
const MAX_EMAIL_LEN: usize = 254;

// =============================================================================
// Handlers
// =============================================================================

/// GET /registry/floaters
///
/// All unclaimed addresses, oldest first
pub async fn list_floaters(State(state): State<AppState>) -> ApiResult<Json<FloaterListResponse>> {
    let repo = EmailRegistryRepository::new(state.pool.clone());
    let floaters = repo.list_floaters().await?;

    Ok(Json(FloaterListResponse {
        floaters: floaters.into_iter().map(FloaterDto::from).collect(),
    }))
}

/// POST /registry/entries
///
/// Register an address as a floater. Idempotent: repeating the call leaves
/// the existing record untouched and reports its current status.
pub async fn register_entry(
    State(state): State<AppState>,
    Json(request): Json<RegisterEntryRequest>,
) -> ApiResult<Json<RegisterEntryResponse>> {
    validate_email_address(&request.email_address)?;

    let repo = EmailRegistryRepository::new(state.pool.clone());
    let record = repo.register(&request.email_address).await?;

    Ok(Json(RegisterEntryResponse {
        email_address: record.email_address,
        status: record.status,
    }))
}

/// POST /registry/claims
///
/// Attempt to claim a floater for the authenticated caller
pub async fn claim_entry(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Json(request): Json<ClaimRequest>,
) -> ApiResult<Json<ClaimResponse>> {
    validate_email_address(&request.email_address)?;

    // Resolve the session projection to the persisted claimant
    let users = UserRepository::new(state.pool.clone());
    let claimant = users
        .find_by_external_id(&session.external_id)
        .await?
        .ok_or_else(ApiError::not_authenticated)?;

    let repo = EmailRegistryRepository::new(state.pool.clone());
    let outcome = repo.claim(&request.email_address, claimant.id).await?;

    info!(
        "Claim on {} by {}: {}",
        request.email_address, session.external_id, outcome
    );

    let verification_token = if outcome.succeeded() {
        repo.find_by_address(&request.email_address)
            .await?
            .and_then(|r| r.verification_token)
    } else {
        None
    };

    Ok(Json(ClaimResponse {
        email_address: request.email_address,
        outcome,
        verification_token,
    }))
}

/// POST /registry/verifications
///
/// Confirm a claim with the token issued alongside it
pub async fn verify_entry(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<VerifyResponse>> {
    validate_email_address(&request.email_address)?;

    let repo = EmailRegistryRepository::new(state.pool.clone());
    let outcome = repo.verify(&request.email_address, &request.token).await?;

    info!("Verification of {}: {}", request.email_address, outcome);

    Ok(Json(VerifyResponse {
        email_address: request.email_address,
        outcome,
    }))
}

// =============================================================================
// Validation
// =============================================================================

/// Format gate for the registration boundary.
///
/// Not a full RFC parser - it rejects strings that cannot be addresses
/// before they reach storage.
pub(crate) fn validate_email_address(address: &str) -> ApiResult<()> {
    let valid = !address.is_empty()
        && address.len() <= MAX_EMAIL_LEN
        && !address.contains(char::is_whitespace)
        && matches!(address.split_once('@'), Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.'));

    if valid {
        Ok(())
    } else {
        Err(ApiError::validation(
            "email_address is not a valid address",
            Some("email_address"),
        ))
    }
}
