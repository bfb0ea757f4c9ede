//! The record store contract and its backends.
//!
//! Every write is complete (durable, for PostgreSQL) before the call
//! returns. Listing is the only query shape: all records, newest first.

mod memory;
mod postgres;

use async_trait::async_trait;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::{DbId, Timestamp};

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

/// Failures from a [`ProjectStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A PostgreSQL query or connection failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// An insert reused an id that is already stored.
    #[error("Project {0} already exists")]
    DuplicateId(DbId),
}

/// Keyed storage of project records.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Persist a fully formed record and return it as stored.
    async fn insert(&self, project: &Project) -> Result<Project, StoreError>;

    /// Overwrite every field but `id` and `created_at`.
    ///
    /// `updated_at` is clamped to be no earlier than `created_at`.
    /// Returns `None` when the id does not exist.
    async fn update(
        &self,
        id: DbId,
        input: &ProjectInput,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError>;

    /// Remove a record. Returns `false` when the id does not exist.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    /// All records ordered by `created_at` descending, ties broken by id
    /// descending.
    async fn list_all(&self) -> Result<Vec<Project>, StoreError>;
}
