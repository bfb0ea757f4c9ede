//! Project validation: field rules plus the duplicate heuristic.
//!
//! [`validate_project`] is the single entry point used by the server
//! (dry-run endpoint) and by the client session before submission.

pub mod duplicate;
pub mod evaluator;
pub mod rules;

use crate::metadata::Metadata;
use crate::project::{Project, ProjectInput};
use crate::types::DbId;

use self::rules::ValidationReport;

/// Validate `candidate` against the metadata and the full `existing` set.
///
/// `editing_id` names the record being edited so it is not reported as a
/// duplicate of itself. The report is invalid when any field rule fails
/// or the duplicate check blocks the submission.
pub fn validate_project(
    candidate: &ProjectInput,
    existing: &[Project],
    editing_id: Option<DbId>,
    metadata: &Metadata,
) -> ValidationReport {
    let errors = evaluator::check_fields(candidate, metadata);
    let duplicate = duplicate::find_duplicate(candidate, existing, editing_id);
    ValidationReport::new(errors, duplicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::valid_input;
    use crate::types::{new_id, now};

    #[test]
    fn valid_candidate_on_empty_set_passes() {
        let report = validate_project(&valid_input(), &[], None, &Metadata::default());
        assert!(report.is_valid);
        assert!(!report.blocked);
        assert!(report.errors.is_empty());
        assert!(report.duplicate.is_none());
    }

    #[test]
    fn duplicate_alone_fails_validation() {
        let existing = vec![Project::new(new_id(), valid_input(), now())];
        let report = validate_project(&valid_input(), &existing, None, &Metadata::default());
        assert!(!report.is_valid);
        assert!(report.blocked);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn editing_self_with_unchanged_fields_passes() {
        let a = Project::new(new_id(), valid_input(), now());
        let report = validate_project(
            &a.to_input(),
            std::slice::from_ref(&a),
            Some(a.id),
            &Metadata::default(),
        );
        assert!(report.is_valid);
    }

    #[test]
    fn field_errors_and_duplicate_are_both_reported() {
        let existing = vec![Project::new(new_id(), valid_input(), now())];
        let mut candidate = valid_input();
        candidate.owner = " ".into();
        let report = validate_project(&candidate, &existing, None, &Metadata::default());
        assert!(!report.is_valid);
        assert!(report.blocked);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "owner");
    }
}
