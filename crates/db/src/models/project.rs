//! Project entity model and DTOs.

use abaad_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row joined with its branch and client names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    #[serde(rename = "ProjectID")]
    pub id: DbId,
    #[serde(rename = "ProjectName")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    /// Contracted (estimated) cost; the reports compute actual cost.
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "BranchID")]
    pub branch_id: DbId,
    #[serde(rename = "ClientID")]
    pub client_id: DbId,
    #[serde(rename = "StartDate")]
    pub start_date: Date,
    #[serde(rename = "EndDate")]
    pub end_date: Option<Date>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "BranchName")]
    pub branch_name: Option<String>,
    #[serde(rename = "ClientName")]
    pub client_name: Option<String>,
}

/// Request body for creating or fully replacing a project.
///
/// Omitted `Cost`/`Revenue` are stored as 0 and an omitted `Status` as
/// `Planning`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(rename = "ProjectName")]
    pub name: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Cost")]
    pub cost: Option<f64>,
    #[serde(rename = "Revenue")]
    pub revenue: Option<f64>,
    #[serde(rename = "BranchID")]
    pub branch_id: Option<DbId>,
    #[serde(rename = "ClientID")]
    pub client_id: Option<DbId>,
    #[serde(rename = "StartDate")]
    pub start_date: Option<Date>,
    #[serde(rename = "EndDate")]
    pub end_date: Option<Date>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

/// Validated project values ready to be written.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub name: String,
    pub location: Option<String>,
    pub cost: f64,
    pub revenue: f64,
    pub branch_id: DbId,
    pub client_id: DbId,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub status: abaad_core::project_status::ProjectStatus,
}
