//! Repository for the `employees` table.

use abaad_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{Employee, EmployeeRecord};

/// Employee columns joined with role, branch, department and manager names.
const SELECT_JOINED: &str = "\
    SELECT e.id, e.name, e.role_id, e.salary, e.branch_id, e.department_id, \
           e.manager_id, e.hire_date, e.email, e.phone_number, \
           r.title AS role_title, b.name AS branch_name, \
           d.name AS department_name, m.name AS manager_name \
    FROM employees e \
    LEFT JOIN roles r ON r.id = e.role_id \
    LEFT JOIN branches b ON b.id = e.branch_id \
    LEFT JOIN departments d ON d.id = e.department_id \
    LEFT JOIN employees m ON m.id = e.manager_id";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} ORDER BY e.name, e.id");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE e.id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Direct reports of a manager, ordered by name.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE e.manager_id = $1 ORDER BY e.name, e.id");
        sqlx::query_as::<_, Employee>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// Insert an employee, returning its ID.
    pub async fn create(pool: &PgPool, input: &EmployeeRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO employees
                (name, role_id, salary, branch_id, department_id, manager_id,
                 hire_date, email, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.role_id)
        .bind(input.salary)
        .bind(input.branch_id)
        .bind(input.department_id)
        .bind(input.manager_id)
        .bind(input.hire_date)
        .bind(&input.email)
        .bind(&input.phone_number)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every mutable column. Returns `false` if no row matched.
    pub async fn update(pool: &PgPool, id: DbId, input: &EmployeeRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET
                name = $2, role_id = $3, salary = $4, branch_id = $5,
                department_id = $6, manager_id = $7, hire_date = $8,
                email = $9, phone_number = $10
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.role_id)
        .bind(input.salary)
        .bind(input.branch_id)
        .bind(input.department_id)
        .bind(input.manager_id)
        .bind(input.hire_date)
        .bind(&input.email)
        .bind(&input.phone_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
