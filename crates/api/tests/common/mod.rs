#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use investtrack_api::config::{ServerConfig, StoreBackend};
use investtrack_api::router::build_app_router;
use investtrack_api::state::AppState;
use investtrack_core::metadata::Metadata;
use investtrack_db::store::MemoryProjectStore;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        database_max_connections: 1,
        metadata_path: None,
    }
}

/// Build the full application router over a fresh, empty memory store.
///
/// The returned router is cheap to clone and every clone shares the store,
/// so a test can issue several requests against the same data.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(Arc::new(MemoryProjectStore::new()), Metadata::default());
    build_app_router(state, &config).unwrap()
}

/// A complete, valid create/update body.
pub fn project_body(company: &str) -> serde_json::Value {
    serde_json::json!({
        "companyName": company,
        "sector": "Health",
        "subSector": "Agroprocessing",
        "region": "Afar",
        "zone": "Zone 1",
        "woreda": "Asayita",
        "approvalDate": "2024-01-15",
        "owner": "Abebe Kebede",
        "advisorCompany": "Addis Advisory",
        "contactPerson": "Sara Tesfaye",
        "ownerPhone": "+251911000000",
        "companyEmail": "info@acme.et",
        "companyWebsite": "https://acme.et",
        "projectStatus": "In Progress",
        "employeesMale": 7,
        "employeesFemale": 5
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project and return the created JSON, asserting a 201.
pub async fn create_project(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app.clone(), "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
