//! Department entity model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A department row joined with its manager's name and headcount.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    #[serde(rename = "DepartmentID")]
    pub id: DbId,
    #[serde(rename = "DepartmentName")]
    pub name: String,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
    #[serde(rename = "ManagerName")]
    pub manager_name: Option<String>,
    #[serde(rename = "EmployeeCount")]
    pub employee_count: i64,
}

/// Request body for creating or fully replacing a department.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentInput {
    #[serde(rename = "DepartmentName")]
    pub name: Option<String>,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
}

/// Validated department values ready to be written.
#[derive(Debug, Clone)]
pub struct DepartmentRecord {
    pub name: String,
    pub manager_id: Option<DbId>,
}
