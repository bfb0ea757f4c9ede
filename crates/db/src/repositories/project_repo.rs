//! Repository for the `projects` table.

use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_name, sector, sub_sector, region, zone, woreda, \
     approval_date, owner, advisor_company, evaluator, granted_by, contact_person, \
     owner_phone, company_email, company_website, project_status, employees_male, \
     employees_female, employees_total, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a fully formed project, returning the stored row.
    ///
    /// `employees_total` is generated by the database.
    pub async fn insert(pool: &PgPool, project: &Project) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                id, company_name, sector, sub_sector, region, zone, woreda,
                approval_date, owner, advisor_company, evaluator, granted_by,
                contact_person, owner_phone, company_email, company_website,
                project_status, employees_male, employees_female, created_at, updated_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                     $16, $17, $18, $19, $20, $21)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project.id)
            .bind(&project.company_name)
            .bind(&project.sector)
            .bind(&project.sub_sector)
            .bind(&project.region)
            .bind(&project.zone)
            .bind(&project.woreda)
            .bind(project.approval_date)
            .bind(&project.owner)
            .bind(&project.advisor_company)
            .bind(&project.evaluator)
            .bind(&project.granted_by)
            .bind(&project.contact_person)
            .bind(&project.owner_phone)
            .bind(&project.company_email)
            .bind(&project.company_website)
            .bind(&project.project_status)
            .bind(project.employees_male)
            .bind(project.employees_female)
            .bind(project.created_at)
            .bind(project.updated_at)
            .fetch_one(pool)
            .await
            .map(Project::from)
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Overwrite every writable column of a project.
    ///
    /// `updated_at` never moves below `created_at`. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
        updated_at: Timestamp,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                company_name = $2,
                sector = $3,
                sub_sector = $4,
                region = $5,
                zone = $6,
                woreda = $7,
                approval_date = $8,
                owner = $9,
                advisor_company = $10,
                evaluator = $11,
                granted_by = $12,
                contact_person = $13,
                owner_phone = $14,
                company_email = $15,
                company_website = $16,
                project_status = $17,
                employees_male = $18,
                employees_female = $19,
                updated_at = GREATEST($20, created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.sector)
            .bind(&input.sub_sector)
            .bind(&input.region)
            .bind(&input.zone)
            .bind(&input.woreda)
            .bind(input.approval_date)
            .bind(&input.owner)
            .bind(&input.advisor_company)
            .bind(&input.evaluator)
            .bind(&input.granted_by)
            .bind(&input.contact_person)
            .bind(&input.owner_phone)
            .bind(&input.company_email)
            .bind(&input.company_website)
            .bind(&input.project_status)
            .bind(input.employees_male)
            .bind(input.employees_female)
            .bind(updated_at)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
