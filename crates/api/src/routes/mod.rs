pub mod dashboard;
pub mod health;
pub mod metadata;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                    list, create
/// /projects/validate           advisory validation (POST)
/// /projects/{id}               get, update, delete
///
/// /metadata                    enumerations (GET)
///
/// /dashboard/stats             aggregate figures (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/metadata", metadata::router())
        .nest("/dashboard", dashboard::router())
}
