//! List filtering and sorting for the project table view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Criteria for narrowing the project list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    /// Case-insensitive substring over company name, owner and contact person.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let exact = |wanted: &Option<String>, actual: &str| {
            wanted
                .as_deref()
                .filter(|w| !w.is_empty())
                .map_or(true, |w| w == actual)
        };

        if !exact(&self.sector, &project.sector)
            || !exact(&self.region, &project.region)
            || !exact(&self.project_status, &project.project_status)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                [&project.company_name, &project.owner, &project.contact_person]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Column to sort the list by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    CreatedAt,
    CompanyName,
    EmployeesTotal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sort order for the list. The default is newest first, matching the
/// order the server returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl ProjectSort {
    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let ordering = match self.key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
            SortKey::CompanyName => a
                .company_name
                .to_lowercase()
                .cmp(&b.company_name.to_lowercase()),
            SortKey::EmployeesTotal => a.employees_total.cmp(&b.employees_total),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Apply `filter` then `sort` to `records`, returning borrowed rows.
pub fn filter_and_sort<'a>(
    records: &'a [Project],
    filter: &ProjectFilter,
    sort: ProjectSort,
) -> Vec<&'a Project> {
    let mut rows: Vec<&Project> = records.iter().filter(|p| filter.matches(p)).collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}
