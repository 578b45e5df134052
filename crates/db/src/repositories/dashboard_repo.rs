//! Read-only queries behind the dashboard summary.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardCounts, DashboardSummary};
use crate::repositories::ProjectRepo;

/// Number of projects listed under "recent projects".
pub const RECENT_PROJECT_LIMIT: i64 = 5;

/// Provides the company-wide summary shown on the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Record counts per entity and total contracted revenue.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT
                (SELECT COUNT(*) FROM branches) AS branch_count,
                (SELECT COUNT(*) FROM employees) AS employee_count,
                (SELECT COUNT(*) FROM projects) AS project_count,
                (SELECT COUNT(*) FROM clients) AS client_count,
                (SELECT COUNT(*) FROM suppliers) AS supplier_count,
                (SELECT COALESCE(SUM(revenue), 0) FROM projects) AS total_revenue",
        )
        .fetch_one(pool)
        .await
    }

    /// Counts plus the most recently created projects.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let counts = Self::counts(pool).await?;
        let recent_projects = ProjectRepo::list_recent(pool, RECENT_PROJECT_LIMIT).await?;
        Ok(DashboardSummary {
            counts,
            recent_projects,
        })
    }
}
