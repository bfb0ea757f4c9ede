//! Duplicate detection over the loaded record set.
//!
//! Two records are duplicates when they share the company name (compared
//! case-insensitively, surrounding whitespace ignored), the sector and the
//! region. The rule is advisory: it blocks form submission but no store
//! enforces it.

use super::rules::DuplicateWarning;
use crate::project::{Project, ProjectInput};
use crate::types::DbId;

/// Normalized company name used for the comparison.
pub fn normalize_company_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether `candidate` and `existing` share the duplicate key.
pub fn is_same_identity(candidate: &ProjectInput, existing: &Project) -> bool {
    candidate.sector == existing.sector
        && candidate.region == existing.region
        && normalize_company_name(&candidate.company_name)
            == normalize_company_name(&existing.company_name)
}

/// Find the first record in `existing` (other than `editing_id`) that
/// shares the candidate's duplicate key.
///
/// A candidate with a blank company name never matches.
pub fn find_duplicate(
    candidate: &ProjectInput,
    existing: &[Project],
    editing_id: Option<DbId>,
) -> Option<DuplicateWarning> {
    if candidate.company_name.trim().is_empty() {
        return None;
    }

    existing
        .iter()
        .filter(|p| Some(p.id) != editing_id)
        .find(|p| is_same_identity(candidate, p))
        .map(|p| DuplicateWarning {
            conflicting_id: p.id,
            company_name: p.company_name.clone(),
            sector: p.sector.clone(),
            region: p.region.clone(),
            message: format!(
                "A project for '{}' in sector '{}' and region '{}' already exists",
                p.company_name, p.sector, p.region
            ),
        })
}
