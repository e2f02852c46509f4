#![allow(dead_code)]

//! Test infrastructure for xb-server API tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use xb_auth::{SessionManager, StaticIdentityProvider};
use xb_core::{ExternalIdentity, User};
use xb_db::UserRepository;
use xb_server::AppState;

pub const TEST_SESSION_SECRET: &[u8] = b"integration-test-secret-32-bytes!";
pub const TEST_ADMIN_TOKEN: &str = "integration-admin-token";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/xb-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (static identity provider, admin enabled)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        sessions: Arc::new(SessionManager::with_hs256(TEST_SESSION_SECRET, 3600)),
        identity: Arc::new(StaticIdentityProvider::default()),
        admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
    }
}

/// Persist a user and return it with a valid bearer token
pub async fn create_session_user(state: &AppState, external_id: &str) -> (User, String) {
    let identity = ExternalIdentity {
        external_id: external_id.to_string(),
        email: format!("{}@test.local", external_id),
        display_name: Some("Test User".to_string()),
        avatar_url: None,
    };

    let user = UserRepository::new(state.pool.clone())
        .upsert_from_identity(&identity)
        .await
        .expect("Failed to create test user");

    let token = state
        .sessions
        .issue(&user.projection())
        .expect("Failed to issue session token");

    (user, token)
}

/// Build a GET request, optionally with a bearer token
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Build a JSON request, optionally with a bearer token
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Collect a response body as JSON
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
