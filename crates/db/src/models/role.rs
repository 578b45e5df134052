//! Role entity model.

use abaad_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    #[serde(rename = "RoleID")]
    pub id: DbId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "EmployeeCount")]
    pub employee_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleInput {
    #[serde(rename = "Title")]
    pub title: Option<String>,
}
