//! Repository for the `roles` lookup table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

const SELECT_JOINED: &str = "\
    SELECT r.id, r.title, \
           (SELECT COUNT(*) FROM employees e WHERE e.role_id = r.id) AS employee_count \
    FROM roles r";

/// Provides CRUD operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY r.title");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE r.id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by its exact title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE r.title = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Insert a role, returning its ID. Titles are unique (`uq_roles_title`).
    pub async fn create(pool: &PgPool, title: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO roles (title) VALUES ($1) RETURNING id")
            .bind(title)
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, title: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE roles SET title = $2 WHERE id = $1")
            .bind(id)
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
