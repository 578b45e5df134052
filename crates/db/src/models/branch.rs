//! Branch entity model and DTOs.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A branch row joined with its current manager and headcounts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Branch {
    #[serde(rename = "BranchID")]
    pub id: DbId,
    #[serde(rename = "BranchName")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
    #[serde(rename = "ManagerName")]
    pub manager_name: Option<String>,
    #[serde(rename = "EmployeeCount")]
    pub employee_count: i64,
    #[serde(rename = "ProjectCount")]
    pub project_count: i64,
}

/// Request body for creating or fully replacing a branch.
///
/// `ManagerID`, when present, (re)assigns the branch manager.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchInput {
    #[serde(rename = "BranchName")]
    pub name: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "ManagerID")]
    pub manager_id: Option<DbId>,
}

/// Validated branch values ready to be written.
#[derive(Debug, Clone)]
pub struct BranchRecord {
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    /// New manager to assign; `None` leaves the current assignment alone.
    pub manager_id: Option<DbId>,
}
