use crate::types::DbId;
use crate::validation::rules::{DuplicateWarning, FieldViolation};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {}", summarize(.0))]
    InvalidFields(Vec<FieldViolation>),

    #[error("{}", .0.message)]
    DuplicateBlocked(DuplicateWarning),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::ViolationRule;

    #[test]
    fn invalid_fields_message_joins_every_violation() {
        let err = CoreError::InvalidFields(vec![
            FieldViolation::new("owner", ViolationRule::Required, "Owner is required"),
            FieldViolation::new(
                "companyEmail",
                ViolationRule::EmailFormat,
                "Company email is invalid",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Owner is required; Company email is invalid"
        );
    }
}
