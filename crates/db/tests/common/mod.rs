//! Shared fixtures for the repository integration tests.
#![allow(dead_code)]

use abaad_core::project_status::ProjectStatus;
use abaad_core::types::{Date, DbId};
use abaad_db::models::branch::BranchRecord;
use abaad_db::models::client::ClientRecord;
use abaad_db::models::department::DepartmentRecord;
use abaad_db::models::employee::EmployeeRecord;
use abaad_db::models::material::MaterialRecord;
use abaad_db::models::project::ProjectRecord;
use abaad_db::models::supplier::SupplierRecord;
use abaad_db::repositories::{
    BranchRepo, ClientRepo, DepartmentRepo, EmployeeRepo, MaterialRepo, ProjectRepo, RoleRepo,
    SupplierRepo,
};
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

pub fn branch(name: &str, city: &str) -> BranchRecord {
    BranchRecord {
        name: name.to_string(),
        city: city.to_string(),
        address: None,
        phone_number: None,
        manager_id: None,
    }
}

pub fn project(name: &str, branch_id: DbId, client_id: DbId, revenue: f64) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        location: None,
        cost: 0.0,
        revenue,
        branch_id,
        client_id,
        start_date: date(2024, 1, 1),
        end_date: None,
        status: ProjectStatus::Active,
    }
}

pub async fn create_branch(pool: &PgPool, name: &str) -> DbId {
    BranchRepo::create(pool, &branch(name, "Riyadh")).await.unwrap()
}

pub async fn create_department(pool: &PgPool, name: &str) -> DbId {
    let input = DepartmentRecord {
        name: name.to_string(),
        manager_id: None,
    };
    DepartmentRepo::create(pool, &input).await.unwrap()
}

pub async fn role_id(pool: &PgPool, title: &str) -> DbId {
    RoleRepo::find_by_title(pool, title)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("role {title} should be seeded"))
        .id
}

/// Insert an employee on the given branch and department.
pub async fn create_employee(
    pool: &PgPool,
    name: &str,
    salary: f64,
    branch_id: DbId,
    department_id: DbId,
    manager_id: Option<DbId>,
) -> DbId {
    let input = EmployeeRecord {
        name: name.to_string(),
        role_id: role_id(pool, "Site Engineer").await,
        salary,
        branch_id,
        department_id,
        manager_id,
        hire_date: date(2023, 3, 15),
        email: None,
        phone_number: None,
    };
    EmployeeRepo::create(pool, &input).await.unwrap()
}

pub async fn create_client(pool: &PgPool, name: &str) -> DbId {
    let input = ClientRecord {
        name: name.to_string(),
        contact_info: None,
    };
    ClientRepo::create(pool, &input).await.unwrap()
}

pub async fn create_project(
    pool: &PgPool,
    name: &str,
    branch_id: DbId,
    client_id: DbId,
    revenue: f64,
) -> DbId {
    ProjectRepo::create(pool, &project(name, branch_id, client_id, revenue))
        .await
        .unwrap()
}

pub async fn create_material(pool: &PgPool, name: &str, base_unit_price: f64) -> DbId {
    let input = MaterialRecord {
        name: name.to_string(),
        base_unit_price,
        unit_of_measure: Some("ton".to_string()),
    };
    MaterialRepo::create(pool, &input).await.unwrap()
}

pub async fn create_supplier(pool: &PgPool, name: &str) -> DbId {
    let input = SupplierRecord {
        name: name.to_string(),
        contact_info: None,
    };
    SupplierRepo::create(pool, &input).await.unwrap()
}

/// SQLSTATE of a database error, if the error came from the database.
pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.code())
        .map(|c| c.into_owned())
}

/// Employee ids stored in `branch_managers` for a branch (at most one).
pub async fn manager_ids(pool: &PgPool, branch_id: DbId) -> Vec<DbId> {
    sqlx::query_scalar("SELECT employee_id FROM branch_managers WHERE branch_id = $1")
        .bind(branch_id)
        .fetch_all(pool)
        .await
        .unwrap()
}
