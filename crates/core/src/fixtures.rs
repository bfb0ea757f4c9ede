//! Shared record builders for unit tests.

use crate::project::{Project, ProjectInput};
use crate::types::{new_id, now};

pub(crate) fn valid_input() -> ProjectInput {
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
        employees_male: 4,
        employees_female: 6,
        ..Default::default()
    }
}

pub(crate) fn project(
    company: &str,
    sector: &str,
    region: &str,
    status: &str,
    male: i32,
    female: i32,
) -> Project {
    let input = ProjectInput {
        company_name: company.into(),
        sector: sector.into(),
        region: region.into(),
        project_status: status.into(),
        employees_male: male,
        employees_female: female,
        ..valid_input()
    };
    Project::new(new_id(), input, now())
}
