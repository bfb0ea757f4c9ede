//! Handlers for dashboard figures.

use axum::extract::State;
use axum::Json;
use investtrack_core::dashboard::DashboardStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Computed over the full stored set on every request.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.projects.dashboard_stats().await?;
    Ok(Json(stats))
}
