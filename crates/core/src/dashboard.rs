//! Dashboard statistics over the full record set.
//!
//! Recomputed from scratch on every call; nothing is cached or updated
//! incrementally.

use serde::{Deserialize, Serialize};

use crate::metadata::{Metadata, STATUS_COMPLETED, STATUS_IN_PROGRESS};
use crate::project::Project;

/// Count and workforce of the records in one sector or region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBreakdown {
    pub name: String,
    pub projects: usize,
    pub employees: i64,
}

/// Number of records in one project status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub projects: usize,
}

/// Aggregates shown on the dashboard and analytics pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_employees: i64,
    pub male_employees: i64,
    pub female_employees: i64,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
    /// `0.0` when there are no employees at all.
    pub male_percentage: f64,
    /// `0.0` when there are no employees at all.
    pub female_percentage: f64,
    pub by_sector: Vec<GroupBreakdown>,
    pub by_status: Vec<StatusCount>,
    pub by_region: Vec<GroupBreakdown>,
}

/// `part * 100 / total`, or `0.0` when `total` is zero.
pub fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

/// Compute every dashboard figure from `records`.
///
/// Breakdown rows follow metadata order and include empty groups. Records
/// whose sector, region or status is not in the metadata count towards
/// the totals but towards no breakdown row.
pub fn compute_dashboard_stats(records: &[Project], metadata: &Metadata) -> DashboardStats {
    let total_employees: i64 = records.iter().map(|p| i64::from(p.employees_total)).sum();
    let male_employees: i64 = records.iter().map(|p| i64::from(p.employees_male)).sum();
    let female_employees: i64 = records.iter().map(|p| i64::from(p.employees_female)).sum();

    let count_status = |status: &str| records.iter().filter(|p| p.project_status == status).count();

    let by_sector = metadata
        .sectors
        .iter()
        .map(|sector| group(sector, records.iter().filter(|p| &p.sector == sector)))
        .collect();

    let by_region = metadata
        .regions
        .iter()
        .map(|region| group(region, records.iter().filter(|p| &p.region == region)))
        .collect();

    let by_status = metadata
        .project_statuses
        .iter()
        .map(|status| StatusCount {
            status: status.clone(),
            projects: count_status(status.as_str()),
        })
        .collect();

    DashboardStats {
        total_projects: records.len(),
        total_employees,
        male_employees,
        female_employees,
        completed_projects: count_status(STATUS_COMPLETED),
        in_progress_projects: count_status(STATUS_IN_PROGRESS),
        male_percentage: percentage(male_employees, total_employees),
        female_percentage: percentage(female_employees, total_employees),
        by_sector,
        by_status,
        by_region,
    }
}

fn group<'a>(name: &str, members: impl Iterator<Item = &'a Project>) -> GroupBreakdown {
    let (projects, employees) = members.fold((0usize, 0i64), |(n, e), p| {
        (n + 1, e + i64::from(p.employees_total))
    });
    GroupBreakdown {
        name: name.to_string(),
        projects,
        employees,
    }
}
