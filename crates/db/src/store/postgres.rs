use async_trait::async_trait;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::{DbId, Timestamp};

use super::{ProjectStore, StoreError};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// [`ProjectStore`] backed by the `projects` table.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn insert(&self, project: &Project) -> Result<Project, StoreError> {
        ProjectRepo::insert(&self.pool, project)
            .await
            .map_err(|e| {
                let reused_id = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation());
                if reused_id {
                    StoreError::DuplicateId(project.id)
                } else {
                    StoreError::Database(e)
                }
            })
    }

    async fn update(
        &self,
        id: DbId,
        input: &ProjectInput,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input, updated_at).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }
}
