//! Employee entity model and DTOs.

use abaad_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee row joined with the display names of its role, branch,
/// department and manager.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    pub id: DbId,
    #[serde(rename = "EmployeeName")]
    pub name: String,
    #[serde(rename = "RoleID")]
    pub role_id: DbId,
    /// Monthly salary.
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "BranchID")]
    pub branch_id: DbId,
    #[serde(rename = "DepartmentID")]
    pub department_id: DbId,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
    #[serde(rename = "HireDate")]
    pub hire_date: Date,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "RoleTitle")]
    pub role_title: Option<String>,
    #[serde(rename = "BranchName")]
    pub branch_name: Option<String>,
    #[serde(rename = "DepartmentName")]
    pub department_name: Option<String>,
    #[serde(rename = "ManagerName")]
    pub manager_name: Option<String>,
}

/// Request body for creating or fully replacing an employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeInput {
    #[serde(rename = "EmployeeName")]
    pub name: Option<String>,
    #[serde(rename = "RoleID")]
    pub role_id: Option<DbId>,
    #[serde(rename = "Salary")]
    pub salary: Option<f64>,
    #[serde(rename = "BranchID")]
    pub branch_id: Option<DbId>,
    #[serde(rename = "DepartmentID")]
    pub department_id: Option<DbId>,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
    #[serde(rename = "HireDate")]
    pub hire_date: Option<Date>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
}

/// Validated employee values ready to be written.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub name: String,
    pub role_id: DbId,
    pub salary: f64,
    pub branch_id: DbId,
    pub department_id: DbId,
    pub manager_id: Option<DbId>,
    pub hire_date: Date,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
