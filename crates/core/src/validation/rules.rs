//! Validation result types.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    /// Field is empty after trimming.
    Required,
    /// `companyEmail` does not look like `local@domain.tld`.
    EmailFormat,
    /// Enumerated field holds a value that is not in the metadata.
    UnknownValue,
    /// Employee count is below zero.
    NonNegative,
    /// Male plus female employees does not fit the stored total.
    OutOfRange,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// camelCase field name as it appears in the JSON payload.
    pub field: String,
    pub rule: ViolationRule,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, rule: ViolationRule, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule,
            message: message.into(),
        }
    }
}

/// An existing record that shares the candidate's
/// (company name, sector, region) triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateWarning {
    pub conflicting_id: DbId,
    pub company_name: String,
    pub sector: String,
    pub region: String,
    pub message: String,
}

/// Outcome of validating one candidate record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// `false` when any field error exists or the submission is blocked.
    pub is_valid: bool,
    /// Set when a duplicate was found; submission must be disabled.
    pub blocked: bool,
    pub errors: Vec<FieldViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<DuplicateWarning>,
}

impl ValidationReport {
    pub fn new(errors: Vec<FieldViolation>, duplicate: Option<DuplicateWarning>) -> Self {
        let blocked = duplicate.is_some();
        Self {
            is_valid: errors.is_empty() && !blocked,
            blocked,
            errors,
            duplicate,
        }
    }
}
