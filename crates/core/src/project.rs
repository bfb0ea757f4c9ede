//! The project record and its write payload.
//!
//! JSON uses camelCase field names (`companyName`, `employeesTotal`, ...).

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Date, DbId, Timestamp};

/// Entity name used in `NotFound` errors and log lines.
pub const ENTITY_PROJECT: &str = "Project";

/// A stored project record.
///
/// `employees_total` is always `employees_male + employees_female`; it is
/// derived on every write and never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
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

impl Project {
    /// Build a new record from client input with `created_at = updated_at = now`.
    pub fn new(id: DbId, input: ProjectInput, now: Timestamp) -> Self {
        let employees_total = input.employees_total();
        Self {
            id,
            company_name: input.company_name,
            sector: input.sector,
            sub_sector: input.sub_sector,
            region: input.region,
            zone: input.zone,
            woreda: input.woreda,
            approval_date: input.approval_date,
            owner: input.owner,
            advisor_company: input.advisor_company,
            evaluator: input.evaluator,
            granted_by: input.granted_by,
            contact_person: input.contact_person,
            owner_phone: input.owner_phone,
            company_email: input.company_email,
            company_website: input.company_website,
            project_status: input.project_status,
            employees_male: input.employees_male,
            employees_female: input.employees_female,
            employees_total,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field except `id` and `created_at`.
    pub fn replace_with(&mut self, input: ProjectInput, updated_at: Timestamp) {
        let created_at = self.created_at;
        *self = Self::new(self.id, input, updated_at);
        self.created_at = created_at;
    }

    /// The writable fields of this record, as a client would resubmit them.
    pub fn to_input(&self) -> ProjectInput {
        ProjectInput {
            company_name: self.company_name.clone(),
            sector: self.sector.clone(),
            sub_sector: self.sub_sector.clone(),
            region: self.region.clone(),
            zone: self.zone.clone(),
            woreda: self.woreda.clone(),
            approval_date: self.approval_date,
            owner: self.owner.clone(),
            advisor_company: self.advisor_company.clone(),
            evaluator: self.evaluator.clone(),
            granted_by: self.granted_by.clone(),
            contact_person: self.contact_person.clone(),
            owner_phone: self.owner_phone.clone(),
            company_email: self.company_email.clone(),
            company_website: self.company_website.clone(),
            project_status: self.project_status.clone(),
            employees_male: self.employees_male,
            employees_female: self.employees_female,
        }
    }
}

/// Body of `POST /api/projects` and `PUT /api/projects/{id}`.
///
/// Updates are full replacements: a field left out of a PUT body is reset
/// (optional text to `null`, employee counts to `0`) and a missing
/// required field fails validation. Unknown keys such as `id`,
/// `employeesTotal` or `createdAt` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub sub_sector: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub woreda: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub approval_date: Option<Date>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub advisor_company: Option<String>,
    #[serde(default)]
    pub evaluator: Option<String>,
    #[serde(default)]
    pub granted_by: Option<String>,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub owner_phone: String,
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub project_status: String,
    #[serde(default)]
    pub employees_male: i32,
    #[serde(default)]
    pub employees_female: i32,
}

impl ProjectInput {
    /// Only meaningful for validated input: the field rules reject counts
    /// whose sum does not fit in an `i32`.
    pub fn employees_total(&self) -> i32 {
        self.employees_male + self.employees_female
    }
}

/// Accept `"2024-03-01"`, a full RFC 3339 timestamp (date part kept), an
/// empty string or `null`. Empty values become `None` so that validation,
/// not deserialization, reports the missing date.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|e| serde::de::Error::custom(format!("invalid approvalDate '{raw}': {e}")))
}
