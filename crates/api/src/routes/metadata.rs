use axum::routing::get;
use axum::Router;

use crate::handlers::metadata;
use crate::state::AppState;

/// Routes mounted at `/metadata`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(metadata::get_metadata))
}
