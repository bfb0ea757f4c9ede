//! Integration tests for `GET /api/metadata`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use investtrack_core::metadata::Metadata;

#[tokio::test]
async fn test_metadata_returns_all_lists() {
    let app = common::build_test_app();
    let response = get(app, "/api/metadata").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for key in ["regions", "sectors", "subSectors", "projectStatuses"] {
        assert!(
            !json[key].as_array().unwrap().is_empty(),
            "{key} should be a non-empty list"
        );
    }

    let statuses = json["projectStatuses"].as_array().unwrap();
    assert!(statuses.contains(&"Completed".into()));
    assert!(statuses.contains(&"In Progress".into()));
    assert!(json["subSectors"].as_array().unwrap().contains(&"Other".into()));
}

#[tokio::test]
async fn test_metadata_is_stable_across_calls() {
    let app = common::build_test_app();
    let first = body_json(get(app.clone(), "/api/metadata").await).await;
    let second = body_json(get(app, "/api/metadata").await).await;
    assert_eq!(first, second);

    let parsed: Metadata = serde_json::from_value(first).unwrap();
    assert_eq!(parsed, Metadata::default());
}
