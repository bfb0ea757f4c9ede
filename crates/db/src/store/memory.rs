use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::{ProjectStore, StoreError};

/// Non-durable [`ProjectStore`] kept in process memory.
///
/// Used for local development without PostgreSQL and by the HTTP tests.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryProjectStore {
    rows: RwLock<HashMap<DbId, Project>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, project: &Project) -> Result<Project, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&project.id) {
            return Err(StoreError::DuplicateId(project.id));
        }
        let mut stored = project.clone();
        stored.employees_total = stored.employees_male + stored.employees_female;
        rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: DbId,
        input: &ProjectInput,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        let updated_at = updated_at.max(row.created_at);
        row.replace_with(input.clone(), updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        let mut all: Vec<Project> = self.rows.read().await.values().cloned().collect();
        all.sort_by_key(|p| Reverse((p.created_at, p.id)));
        Ok(all)
    }
}
