//! Repository for the `projects` table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, ProjectRecord};

/// Project columns joined with branch and client names.
const SELECT_JOINED: &str = "\
    SELECT p.id, p.name, p.location, p.cost, p.revenue, p.branch_id, p.client_id, \
           p.start_date, p.end_date, p.status, \
           b.name AS branch_name, c.name AS client_name \
    FROM projects p \
    LEFT JOIN branches b ON b.id = p.branch_id \
    LEFT JOIN clients c ON c.id = p.client_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY p.name, p.id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// The most recently created projects (highest IDs first).
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY p.id DESC LIMIT $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE p.id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a project with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a project, returning its ID.
    pub async fn create(pool: &PgPool, input: &ProjectRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO projects
                (name, location, cost, revenue, branch_id, client_id,
                 start_date, end_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.cost)
        .bind(input.revenue)
        .bind(input.branch_id)
        .bind(input.client_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status.as_str())
        .fetch_one(pool)
        .await
    }

    /// Overwrite every mutable column. Returns `false` if no row matched.
    pub async fn update(pool: &PgPool, id: DbId, input: &ProjectRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                name = $2, location = $3, cost = $4, revenue = $5,
                branch_id = $6, client_id = $7, start_date = $8,
                end_date = $9, status = $10
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.cost)
        .bind(input.revenue)
        .bind(input.branch_id)
        .bind(input.client_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
