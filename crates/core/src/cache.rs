//! Client-side copy of the full project set.
//!
//! The cache is loaded once per session and then kept current by merging
//! the canonical record the server returns after each mutation. There is
//! no invalidation channel: other clients' writes only show up after a
//! full reload.

use crate::dashboard::{compute_dashboard_stats, DashboardStats};
use crate::filter::{filter_and_sort, ProjectFilter, ProjectSort};
use crate::metadata::Metadata;
use crate::project::{Project, ProjectInput};
use crate::types::DbId;
use crate::validation::rules::ValidationReport;
use crate::validation::validate_project;

#[derive(Debug, Clone, Default)]
pub struct ProjectCache {
    records: Vec<Project>,
}

impl ProjectCache {
    pub fn new(records: Vec<Project>) -> Self {
        Self { records }
    }

    /// Replace the whole set, as after a full reload.
    pub fn replace_all(&mut self, records: Vec<Project>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Project] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&Project> {
        self.records.iter().find(|p| p.id == id)
    }

    /// Merge a newly created record (appended).
    pub fn apply_created(&mut self, project: Project) {
        self.records.push(project);
    }

    /// Merge an updated record, replacing the entry with the same id.
    ///
    /// Returns `false` if the id was not cached; the record is then
    /// appended so the cache still reflects the server.
    pub fn apply_updated(&mut self, project: Project) -> bool {
        match self.records.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => {
                self.records.push(project);
                false
            }
        }
    }

    /// Drop a deleted record. Returns `false` if the id was not cached.
    pub fn apply_deleted(&mut self, id: DbId) -> bool {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        self.records.len() != before
    }

    /// Validate a form candidate against the cached set.
    pub fn validate(
        &self,
        candidate: &ProjectInput,
        editing_id: Option<DbId>,
        metadata: &Metadata,
    ) -> ValidationReport {
        validate_project(candidate, &self.records, editing_id, metadata)
    }

    /// Dashboard figures over the cached set.
    pub fn stats(&self, metadata: &Metadata) -> DashboardStats {
        compute_dashboard_stats(&self.records, metadata)
    }

    /// Rows for the list view.
    pub fn view(&self, filter: &ProjectFilter, sort: ProjectSort) -> Vec<&Project> {
        filter_and_sort(&self.records, filter, sort)
    }
}
