//! Integration tests for the public page contexts and health endpoints
mod common;

use crate::common::{create_test_app_state, get_request, read_json};

use axum::http::StatusCode;
use tower::ServiceExt;

use xb_core::{StudioStatus, VirtualStudio};
use xb_db::VirtualStudioRepository;
use xb_server::build_router;

#[tokio::test]
async fn test_public_pages_yield_template_contexts() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    for (uri, template) in [
        ("/api/v1/pages/home", "index.html"),
        ("/api/v1/pages/about", "about.html"),
        ("/api/v1/pages/contact", "contact.html"),
    ] {
        let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["template"], template);
    }
}

#[tokio::test]
async fn test_services_page_lists_active_studios_only() {
    let state = create_test_app_state().await;

    let repo = VirtualStudioRepository::new(state.pool.clone());
    let mut active = VirtualStudio::new("Obsidian Animation".to_string(), "animation".to_string());
    active.description = Some("Full-service 3D animation".to_string());
    repo.create(&active).await.unwrap();

    let mut inactive = VirtualStudio::new("Retired Renders".to_string(), "render-farm".to_string());
    inactive.status = StudioStatus::Inactive;
    repo.create(&inactive).await.unwrap();

    let app = build_router(state);
    let response = app
        .oneshot(get_request("/api/v1/pages/services", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["template"], "services.html");

    let studios = body["studios"].as_array().unwrap();
    assert_eq!(studios.len(), 1);
    assert_eq!(studios[0]["studio_name"], "Obsidian Animation");
    assert_eq!(studios[0]["studio_type"], "animation");
}

#[tokio::test]
async fn test_health_endpoints() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(get_request("/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"]["database"], "operational");

    let response = app
        .clone()
        .oneshot(get_request("/live", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/ready", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
