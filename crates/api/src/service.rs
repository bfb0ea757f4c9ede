//! Record service: the only writer of persisted project state.
//!
//! Assigns identifiers and timestamps, runs field validation, and maps
//! missing ids to [`CoreError::NotFound`]. The duplicate rule is reported
//! by [`ProjectService::validate`] but never enforced here.

use std::sync::Arc;

use investtrack_core::dashboard::{compute_dashboard_stats, DashboardStats};
use investtrack_core::error::CoreError;
use investtrack_core::metadata::Metadata;
use investtrack_core::project::{Project, ProjectInput, ENTITY_PROJECT};
use investtrack_core::types::{new_id, now, DbId};
use investtrack_core::validation::evaluator::check_fields;
use investtrack_core::validation::rules::ValidationReport;
use investtrack_core::validation::validate_project;
use investtrack_db::store::ProjectStore;

use crate::error::AppResult;

/// Typed CRUD over a [`ProjectStore`]. Cheap to clone.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
    metadata: Arc<Metadata>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>, metadata: Arc<Metadata>) -> Self {
        Self { store, metadata }
    }

    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        &self.store
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    /// All records, newest first.
    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get_project(&self, id: DbId) -> AppResult<Project> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Create a record with a fresh id and `created_at = updated_at = now`.
    pub async fn create_project(&self, input: ProjectInput) -> AppResult<Project> {
        self.check(&input)?;

        let project = Project::new(new_id(), input, now());
        let stored = self.store.insert(&project).await?;

        tracing::info!(
            project_id = %stored.id,
            company_name = %stored.company_name,
            "Project created"
        );
        Ok(stored)
    }

    /// Replace every field except `id` and `created_at`, returning the
    /// record as read back from the store.
    pub async fn update_project(&self, id: DbId, input: ProjectInput) -> AppResult<Project> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id).into());
        }
        self.check(&input)?;

        let updated = self
            .store
            .update(id, &input, now())
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            project_id = %updated.id,
            company_name = %updated.company_name,
            "Project updated"
        );
        Ok(updated)
    }

    /// Irreversibly remove a record.
    pub async fn delete_project(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    /// Advisory validation of a candidate against the full stored set,
    /// including the duplicate check.
    pub async fn validate(
        &self,
        candidate: &ProjectInput,
        editing_id: Option<DbId>,
    ) -> AppResult<ValidationReport> {
        let existing = self.store.list_all().await?;
        let report = validate_project(candidate, &existing, editing_id, &self.metadata);
        if report.blocked {
            tracing::debug!(
                company_name = %candidate.company_name,
                "Candidate matches an existing project"
            );
        }
        Ok(report)
    }

    /// Dashboard figures over the full stored set.
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let records = self.store.list_all().await?;
        Ok(compute_dashboard_stats(&records, &self.metadata))
    }

    fn check(&self, input: &ProjectInput) -> Result<(), CoreError> {
        let errors = check_fields(input, &self.metadata);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(errors))
        }
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_PROJECT,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use investtrack_db::store::MemoryProjectStore;

    use crate::error::AppError;

    fn service() -> ProjectService {
        ProjectService::new(
            Arc::new(MemoryProjectStore::new()),
            Arc::new(Metadata::default()),
        )
    }

    fn input() -> ProjectInput {
        ProjectInput {
            company_name: "Acme".into(),
            sector: "Health".into(),
            sub_sector: "Agroprocessing".into(),
            region: "Afar".into(),
            zone: "Zone 1".into(),
            woreda: "Asayita".into(),
            approval_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
            owner: "Abebe Kebede".into(),
            contact_person: "Sara Tesfaye".into(),
            owner_phone: "+251911000000".into(),
            company_email: "info@acme.et".into(),
            project_status: "In Progress".into(),
            employees_male: 7,
            employees_female: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let svc = service();
        let p = svc.create_project(input()).await.unwrap();
        assert_eq!(p.created_at, p.updated_at);
        assert_eq!(p.employees_total, 12);
        assert_eq!(p.to_input(), input());
    }

    #[tokio::test]
    async fn create_ids_are_unique() {
        let svc = service();
        let mut second = input();
        second.company_name = "Other".into();
        let a = svc.create_project(input()).await.unwrap();
        let b = svc.create_project(second).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() {
        let svc = service();
        let mut bad = input();
        bad.company_email = "nope".into();
        bad.owner = String::new();
        let err = svc.create_project(bad).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::InvalidFields(v)) if v.len() == 2);
        assert!(svc.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_does_not_enforce_duplicates() {
        let svc = service();
        svc.create_project(input()).await.unwrap();
        svc.create_project(input()).await.unwrap();
        assert_eq!(svc.list_projects().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_with_same_values_only_moves_updated_at() {
        let svc = service();
        let created = svc.create_project(input()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = svc
            .update_project(created.id, created.to_input())
            .await
            .unwrap();
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(
            Project {
                updated_at: created.updated_at,
                ..updated
            },
            created
        );
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service();
        let err = svc.update_project(new_id(), input()).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_missing_with_invalid_body_is_still_not_found() {
        let svc = service();
        let err = svc
            .update_project(new_id(), ProjectInput::default())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let svc = service();
        let err = svc.delete_project(new_id()).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn validate_reports_duplicates_but_excludes_self() {
        let svc = service();
        let a = svc.create_project(input()).await.unwrap();

        let report = svc.validate(&input(), None).await.unwrap();
        assert!(report.blocked);
        assert!(!report.is_valid);

        let report = svc.validate(&a.to_input(), Some(a.id)).await.unwrap();
        assert!(report.is_valid);
    }

    #[tokio::test]
    async fn dashboard_reflects_store() {
        let svc = service();
        svc.create_project(input()).await.unwrap();
        let stats = svc.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_projects, 1);
        assert_eq!(stats.total_employees, 12);
        assert_eq!(stats.in_progress_projects, 1);
    }
}
