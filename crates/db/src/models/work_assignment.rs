//! Work assignment (employee hours on a project) model and DTOs.

use abaad_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkAssignment {
    #[serde(rename = "ProjectID")]
    pub project_id: DbId,
    #[serde(rename = "EmployeeID")]
    pub employee_id: DbId,
    /// Role the employee plays on this project (free text, not a `roles` row).
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "HoursWorked")]
    pub hours_worked: f64,
    #[serde(rename = "StartDate")]
    pub start_date: Date,
    #[serde(rename = "EndDate")]
    pub end_date: Option<Date>,
    #[serde(rename = "ProjectName")]
    pub project_name: Option<String>,
    #[serde(rename = "EmployeeName")]
    pub employee_name: Option<String>,
    #[serde(rename = "RoleTitle")]
    pub role_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkAssignmentInput {
    #[serde(rename = "ProjectID")]
    pub project_id: Option<DbId>,
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<DbId>,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "HoursWorked")]
    pub hours_worked: Option<f64>,
    #[serde(rename = "StartDate")]
    pub start_date: Option<Date>,
    #[serde(rename = "EndDate")]
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone)]
pub struct WorkAssignmentRecord {
    pub project_id: DbId,
    pub employee_id: DbId,
    pub role: String,
    pub hours_worked: f64,
    pub start_date: Date,
    pub end_date: Option<Date>,
}
