//! One user's working copy of the registry.
//!
//! The full set is loaded once. Every submission is validated against the
//! cached set first; only a clean report reaches the server, and the
//! record the server returns is merged into the cache. Writes from other
//! clients are not seen until [`Session::reload`].

use investtrack_core::cache::ProjectCache;
use investtrack_core::dashboard::DashboardStats;
use investtrack_core::error::CoreError;
use investtrack_core::filter::{ProjectFilter, ProjectSort};
use investtrack_core::metadata::Metadata;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::DbId;
use investtrack_core::validation::rules::ValidationReport;

use crate::api::{ApiClientError, ProjectsApi};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The submission failed local validation and was not sent.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The server call failed.
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

pub struct Session {
    api: ProjectsApi,
    metadata: Metadata,
    cache: ProjectCache,
}

impl Session {
    /// Fetch metadata and the full record set.
    pub async fn load(api: ProjectsApi) -> Result<Self, SessionError> {
        let metadata = api.metadata().await?;
        let records = api.list_projects().await?;
        tracing::debug!(records = records.len(), "Session loaded");
        Ok(Self {
            api,
            metadata,
            cache: ProjectCache::new(records),
        })
    }

    /// Replace the cached set with the server's current one.
    pub async fn reload(&mut self) -> Result<(), SessionError> {
        let records = self.api.list_projects().await?;
        self.cache.replace_all(records);
        Ok(())
    }

    pub fn api(&self) -> &ProjectsApi {
        &self.api
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn cache(&self) -> &ProjectCache {
        &self.cache
    }

    /// Validate a form candidate against the cached set.
    pub fn validate(&self, input: &ProjectInput, editing_id: Option<DbId>) -> ValidationReport {
        self.cache.validate(input, editing_id, &self.metadata)
    }

    pub fn stats(&self) -> DashboardStats {
        self.cache.stats(&self.metadata)
    }

    pub fn view(&self, filter: &ProjectFilter, sort: ProjectSort) -> Vec<&Project> {
        self.cache.view(filter, sort)
    }

    /// Validate, create, and append the stored record to the cache.
    pub async fn create(&mut self, input: ProjectInput) -> Result<Project, SessionError> {
        ensure_submittable(self.validate(&input, None))?;
        let project = self.api.create_project(&input).await?;
        self.cache.apply_created(project.clone());
        Ok(project)
    }

    /// Validate (excluding the record itself), update, and replace the
    /// cached entry with the stored record.
    pub async fn update(&mut self, id: DbId, input: ProjectInput) -> Result<Project, SessionError> {
        ensure_submittable(self.validate(&input, Some(id)))?;
        let project = self.api.update_project(id, &input).await?;
        self.cache.apply_updated(project.clone());
        Ok(project)
    }

    /// Delete on the server and drop the cached entry.
    ///
    /// A 404 means someone else already removed it; the stale entry is
    /// dropped before the error is returned.
    pub async fn delete(&mut self, id: DbId) -> Result<(), SessionError> {
        match self.api.delete_project(id).await {
            Ok(_) => {
                self.cache.apply_deleted(id);
                Ok(())
            }
            Err(e) => {
                if e.is_not_found() {
                    self.cache.apply_deleted(id);
                }
                Err(e.into())
            }
        }
    }
}

/// Field errors take precedence; a clean form that matches an existing
/// record is refused as a duplicate.
fn ensure_submittable(report: ValidationReport) -> Result<(), CoreError> {
    if !report.errors.is_empty() {
        return Err(CoreError::InvalidFields(report.errors));
    }
    if let Some(duplicate) = report.duplicate {
        return Err(CoreError::DuplicateBlocked(duplicate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use investtrack_core::validation::rules::{DuplicateWarning, FieldViolation, ViolationRule};

    fn warning() -> DuplicateWarning {
        DuplicateWarning {
            conflicting_id: DbId::nil(),
            company_name: "Acme".into(),
            sector: "Health".into(),
            region: "Afar".into(),
            message: "exists".into(),
        }
    }

    #[test]
    fn clean_report_is_submittable() {
        assert!(ensure_submittable(ValidationReport::new(vec![], None)).is_ok());
    }

    #[test]
    fn duplicate_blocks_submission() {
        let report = ValidationReport::new(vec![], Some(warning()));
        assert_matches!(
            ensure_submittable(report),
            Err(CoreError::DuplicateBlocked(w)) if w.company_name == "Acme"
        );
    }

    #[test]
    fn field_errors_win_over_duplicate() {
        let errors = vec![FieldViolation::new("owner", ViolationRule::Required, "Owner is required")];
        let report = ValidationReport::new(errors, Some(warning()));
        assert_matches!(
            ensure_submittable(report),
            Err(CoreError::InvalidFields(v)) if v.len() == 1
        );
    }
}
