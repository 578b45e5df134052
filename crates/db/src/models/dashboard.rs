//! Dashboard summary model.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::project::Project;

/// Company-wide record counts and revenue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardCounts {
    #[serde(rename = "BranchCount")]
    pub branch_count: i64,
    #[serde(rename = "EmployeeCount")]
    pub employee_count: i64,
    #[serde(rename = "ProjectCount")]
    pub project_count: i64,
    #[serde(rename = "ClientCount")]
    pub client_count: i64,
    #[serde(rename = "SupplierCount")]
    pub supplier_count: i64,
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: f64,
}

/// Response payload of `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub counts: DashboardCounts,
    #[serde(rename = "RecentProjects")]
    pub recent_projects: Vec<Project>,
}
