//! Repository for the `branches` and `branch_managers` tables.

use abaad_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::branch::{Branch, BranchRecord};

/// Branch columns joined with the current manager and headcounts.
const SELECT_JOINED: &str = "\
    SELECT b.id, b.name, b.city, b.address, b.phone_number, \
           bm.employee_id AS manager_id, m.name AS manager_name, \
           (SELECT COUNT(*) FROM employees e WHERE e.branch_id = b.id) AS employee_count, \
           (SELECT COUNT(*) FROM projects p WHERE p.branch_id = b.id) AS project_count \
    FROM branches b \
    LEFT JOIN branch_managers bm ON bm.branch_id = b.id \
    LEFT JOIN employees m ON m.id = bm.employee_id";

/// Provides CRUD operations for branches and their manager assignment.
pub struct BranchRepo;

impl BranchRepo {
    /// List all branches ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Branch>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY b.name, b.id");
        sqlx::query_as::<_, Branch>(&query).fetch_all(pool).await
    }

    /// Find a branch by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE b.id = $1");
        sqlx::query_as::<_, Branch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a branch and, if given, its manager in one transaction.
    ///
    /// Returns the new branch ID.
    pub async fn create(pool: &PgPool, input: &BranchRecord) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO branches (name, city, address, phone_number)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(employee_id) = input.manager_id {
            Self::upsert_manager(&mut tx, id, employee_id).await?;
        }

        tx.commit().await?;
        Ok(id)
    }

    /// Overwrite every column of a branch; reassigns the manager when
    /// `manager_id` is set.
    ///
    /// Returns `false` (and writes nothing) if the branch does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &BranchRecord) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE branches SET name = $2, city = $3, address = $4, phone_number = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.phone_number)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        if let Some(employee_id) = input.manager_id {
            Self::upsert_manager(&mut tx, id, employee_id).await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a branch by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign `employee_id` as the branch's manager, replacing any
    /// previous assignment.
    async fn upsert_manager(
        tx: &mut Transaction<'_, Postgres>,
        branch_id: DbId,
        employee_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO branch_managers (branch_id, employee_id, assigned_date)
             VALUES ($1, $2, CURRENT_DATE)
             ON CONFLICT (branch_id) DO UPDATE SET
                employee_id = EXCLUDED.employee_id,
                assigned_date = EXCLUDED.assigned_date",
        )
        .bind(branch_id)
        .bind(employee_id)
        .execute(&mut **tx)
        .await?;

        tracing::debug!(branch_id, employee_id, "Branch manager assigned");
        Ok(())
    }
}
