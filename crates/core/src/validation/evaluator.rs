//! Field rule evaluator -- pure logic, no database access.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{FieldViolation, ViolationRule};
use crate::metadata::Metadata;
use crate::project::ProjectInput;

/// Loose `local@domain.tld` shape check.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Required fields in form order: `(json field, label, value)`.
fn required_fields(input: &ProjectInput) -> [(&'static str, &'static str, bool); 12] {
    let filled = |s: &str| !s.trim().is_empty();
    [
        ("companyName", "Company name", filled(&input.company_name)),
        ("sector", "Sector", filled(&input.sector)),
        ("subSector", "Sub-sector", filled(&input.sub_sector)),
        ("region", "Region", filled(&input.region)),
        ("zone", "Zone", filled(&input.zone)),
        ("woreda", "Woreda", filled(&input.woreda)),
        ("approvalDate", "Approval date", input.approval_date.is_some()),
        ("owner", "Owner", filled(&input.owner)),
        ("projectStatus", "Project status", filled(&input.project_status)),
        ("contactPerson", "Contact person", filled(&input.contact_person)),
        ("ownerPhone", "Owner phone", filled(&input.owner_phone)),
        ("companyEmail", "Company email", filled(&input.company_email)),
    ]
}

/// Whether `email` matches the loose `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Run every field rule against `input`, returning one violation per
/// failing field.
///
/// A blank field only reports `required`; format and membership rules
/// apply to non-blank values.
pub fn check_fields(input: &ProjectInput, metadata: &Metadata) -> Vec<FieldViolation> {
    let mut errors: Vec<FieldViolation> = required_fields(input)
        .into_iter()
        .filter(|(_, _, filled)| !filled)
        .map(|(field, label, _)| {
            FieldViolation::new(field, ViolationRule::Required, format!("{label} is required"))
        })
        .collect();

    let email = input.company_email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.push(FieldViolation::new(
            "companyEmail",
            ViolationRule::EmailFormat,
            "Company email is invalid",
        ));
    }

    let memberships = [
        ("sector", "Sector", &input.sector, metadata.is_sector(&input.sector)),
        ("region", "Region", &input.region, metadata.is_region(&input.region)),
        (
            "projectStatus",
            "Project status",
            &input.project_status,
            metadata.is_project_status(&input.project_status),
        ),
    ];
    for (field, label, value, known) in memberships {
        if !value.trim().is_empty() && !known {
            errors.push(FieldViolation::new(
                field,
                ViolationRule::UnknownValue,
                format!("{label} '{value}' is not a known value"),
            ));
        }
    }

    for (field, label, count) in [
        ("employeesMale", "Male employees", input.employees_male),
        ("employeesFemale", "Female employees", input.employees_female),
    ] {
        if count < 0 {
            errors.push(FieldViolation::new(
                field,
                ViolationRule::NonNegative,
                format!("{label} must not be negative"),
            ));
        }
    }

    if input
        .employees_male
        .checked_add(input.employees_female)
        .is_none()
    {
        errors.push(FieldViolation::new(
            "employeesTotal",
            ViolationRule::OutOfRange,
            format!("Total employees must not exceed {}", i32::MAX),
        ));
    }

    errors
}
