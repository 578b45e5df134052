//! Repository for the `work_assignments` junction table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_assignment::{WorkAssignment, WorkAssignmentRecord};

/// Joined projection over a `wa` row source.
const PROJECTION: &str = "\
    SELECT wa.project_id, wa.employee_id, wa.role, wa.hours_worked, \
           wa.start_date, wa.end_date, \
           p.name AS project_name, e.name AS employee_name, r.title AS role_title";

const JOINS: &str = "\
    LEFT JOIN projects p ON p.id = wa.project_id \
    LEFT JOIN employees e ON e.id = wa.employee_id \
    LEFT JOIN roles r ON r.id = e.role_id";

/// Provides list/upsert/delete for employee hours on projects.
pub struct WorkAssignmentRepo;

impl WorkAssignmentRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkAssignment>, sqlx::Error> {
        let query = format!(
            "{PROJECTION} FROM work_assignments wa {JOINS}
             ORDER BY p.name, e.name"
        );
        sqlx::query_as::<_, WorkAssignment>(&query)
            .fetch_all(pool)
            .await
    }

    /// Assignments on one project, most hours first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<WorkAssignment>, sqlx::Error> {
        let query = format!(
            "{PROJECTION} FROM work_assignments wa {JOINS}
             WHERE wa.project_id = $1
             ORDER BY wa.hours_worked DESC, e.name"
        );
        sqlx::query_as::<_, WorkAssignment>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the assignment keyed on (project, employee).
    pub async fn upsert(
        pool: &PgPool,
        input: &WorkAssignmentRecord,
    ) -> Result<WorkAssignment, sqlx::Error> {
        let query = format!(
            "WITH wa AS (
                INSERT INTO work_assignments
                    (project_id, employee_id, role, hours_worked, start_date, end_date)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (project_id, employee_id) DO UPDATE SET
                    role = EXCLUDED.role,
                    hours_worked = EXCLUDED.hours_worked,
                    start_date = EXCLUDED.start_date,
                    end_date = EXCLUDED.end_date
                RETURNING *
             )
             {PROJECTION} FROM wa {JOINS}"
        );
        sqlx::query_as::<_, WorkAssignment>(&query)
            .bind(input.project_id)
            .bind(input.employee_id)
            .bind(&input.role)
            .bind(input.hours_worked)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        project_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM work_assignments WHERE project_id = $1 AND employee_id = $2",
        )
        .bind(project_id)
        .bind(employee_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
