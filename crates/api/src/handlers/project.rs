//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::DbId;
use investtrack_core::validation::rules::ValidationReport;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /api/projects/validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub project: ProjectInput,
    /// Record being edited; excluded from the duplicate check.
    #[serde(default)]
    pub editing_id: Option<DbId>,
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.projects.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = state.projects.get_project(id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Full replacement: omitted optional fields become null and omitted
/// counts become zero.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<Project>> {
    let project = state.projects.update_project(id, input).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.projects.delete_project(id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// POST /api/projects/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequest>,
) -> AppResult<Json<ValidationReport>> {
    let report = state
        .projects
        .validate(&body.project, body.editing_id)
        .await?;
    Ok(Json(report))
}
