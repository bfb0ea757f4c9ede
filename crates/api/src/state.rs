use std::sync::Arc;

use investtrack_core::metadata::Metadata;
use investtrack_db::store::ProjectStore;

use crate::service::ProjectService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record service over the configured store. Also owns the immutable
    /// metadata snapshot served by `/api/metadata`.
    pub projects: ProjectService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, metadata: Metadata) -> Self {
        Self {
            projects: ProjectService::new(store, Arc::new(metadata)),
        }
    }
}
