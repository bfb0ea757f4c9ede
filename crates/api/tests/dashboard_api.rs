//! Integration tests for `GET /api/dashboard/stats`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, delete, get, project_body};

#[tokio::test]
async fn test_stats_on_empty_store() {
    let app = common::build_test_app();
    let response = get(app, "/api/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalProjects"], 0);
    assert_eq!(json["totalEmployees"], 0);
    assert_eq!(json["malePercentage"], 0.0);
    assert_eq!(json["femalePercentage"], 0.0);
}

#[tokio::test]
async fn test_stats_track_mutations() {
    let app = common::build_test_app();

    let mut completed = project_body("Acme");
    completed["projectStatus"] = "Completed".into();
    completed["employeesMale"] = 4.into();
    completed["employeesFemale"] = 6.into();
    create_project(&app, completed).await;

    let mut mining = project_body("Blue Nile");
    mining["sector"] = "Mining".into();
    mining["employeesMale"] = 10.into();
    mining["employeesFemale"] = 0.into();
    let second = create_project(&app, mining).await;

    let json = body_json(get(app.clone(), "/api/dashboard/stats").await).await;
    assert_eq!(json["totalProjects"], 2);
    assert_eq!(json["totalEmployees"], 20);
    assert_eq!(json["maleEmployees"], 14);
    assert_eq!(json["femaleEmployees"], 6);
    assert_eq!(json["completedProjects"], 1);
    assert_eq!(json["inProgressProjects"], 1);
    assert_eq!(json["malePercentage"], 70.0);
    assert_eq!(json["femalePercentage"], 30.0);

    let health = json["bySector"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["name"] == "Health")
        .unwrap();
    assert_eq!(health["projects"], 1);
    assert_eq!(health["employees"], 10);

    let uri = format!("/api/projects/{}", second["id"].as_str().unwrap());
    delete(app.clone(), &uri).await;

    let json = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(json["totalProjects"], 1);
    assert_eq!(json["totalEmployees"], 10);
}
