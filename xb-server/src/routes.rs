use crate::state::AppState;
use crate::{admin, health};
use crate::{
    about, claim_entry, contact, dashboard, home, list_floaters, login, logout, me,
    register_entry, services, show_portal, verify_entry,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public page contexts
        .route("/api/v1/pages/home", get(home))
        .route("/api/v1/pages/services", get(services))
        .route("/api/v1/pages/about", get(about))
        .route("/api/v1/pages/contact", get(contact))
        // Session lifecycle
        .route("/api/v1/auth/google", post(login))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/session", delete(logout))
        // Gated portal surface
        .route("/api/v1/dashboard", get(dashboard))
        .route("/api/v1/portals/{portal_type}", get(show_portal))
        // Email registry
        .route("/registry/floaters", get(list_floaters))
        .route("/registry/entries", post(register_entry))
        .route("/registry/claims", post(claim_entry))
        .route("/registry/verifications", post(verify_entry))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .route("/admin/registry/suspensions", post(admin::suspend_entry))
        // Add shared state
        .with_state(state)
        // CORS middleware (the rendering frontend lives on its own origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
