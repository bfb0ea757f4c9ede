//! Row type for the `projects` table.

use investtrack_core::project::Project;
use investtrack_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub company_name: String,
    pub sector: String,
    pub sub_sector: String,
    pub region: String,
    pub zone: String,
    pub woreda: String,
    pub approval_date: Option<Date>,
    pub owner: String,
    pub advisor_company: Option<String>,
    pub evaluator: Option<String>,
    pub granted_by: Option<String>,
    pub contact_person: String,
    pub owner_phone: String,
    pub company_email: String,
    pub company_website: Option<String>,
    pub project_status: String,
    pub employees_male: i32,
    pub employees_female: i32,
    pub employees_total: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            company_name: row.company_name,
            sector: row.sector,
            sub_sector: row.sub_sector,
            region: row.region,
            zone: row.zone,
            woreda: row.woreda,
            approval_date: row.approval_date,
            owner: row.owner,
            advisor_company: row.advisor_company,
            evaluator: row.evaluator,
            granted_by: row.granted_by,
            contact_person: row.contact_person,
            owner_phone: row.owner_phone,
            company_email: row.company_email,
            company_website: row.company_website,
            project_status: row.project_status,
            employees_male: row.employees_male,
            employees_female: row.employees_female,
            employees_total: row.employees_total,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
