use axum::extract::State;
use axum::Json;
use investtrack_core::metadata::Metadata;

use crate::state::AppState;

/// GET /api/metadata
pub async fn get_metadata(State(state): State<AppState>) -> Json<Metadata> {
    Json(Metadata::clone(state.projects.metadata()))
}
