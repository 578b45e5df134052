//! Repository for the `departments` table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{Department, DepartmentRecord};

const SELECT_JOINED: &str = "\
    SELECT d.id, d.name, d.manager_id, m.name AS manager_name, \
           (SELECT COUNT(*) FROM employees e WHERE e.department_id = d.id) AS employee_count \
    FROM departments d \
    LEFT JOIN employees m ON m.id = d.manager_id";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY d.name, d.id");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE d.id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a department, returning its ID.
    pub async fn create(pool: &PgPool, input: &DepartmentRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO departments (name, manager_id) VALUES ($1, $2) RETURNING id")
            .bind(&input.name)
            .bind(input.manager_id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite name and manager. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DepartmentRecord,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE departments SET name = $2, manager_id = $3 WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(input.manager_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
