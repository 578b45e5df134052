//! Aggregation queries behind the report endpoints.
//!
//! SQL does the joins and sums; [`crate::models::report`] derives the
//! remaining metrics, ranks and ordering.

use abaad_core::project_status::ProjectStatus;
use abaad_core::reports::{HOURS_PER_MONTH, SUPPLIER_PRICE_TOLERANCE, TOP_PROJECTS_PER_MATERIAL};
use sqlx::PgPool;

use crate::models::report::{
    build_branch_performance, build_employee_utilization, build_hot_materials,
    build_price_anomalies, build_profitability, build_supplier_impact, BranchPerformanceRaw,
    BranchPerformanceRow, EmployeeUtilizationRow, HotMaterialRow, ManagerProjectHoursRaw,
    ManagerTeamRaw, MaterialProjectCostRaw, MaterialTotalRaw, PriceAnomalyRaw, PriceAnomalyRow,
    ProfitabilityRaw, ProfitabilityRow, SupplierImpactRaw, SupplierImpactRow,
};

/// Per-project material and labor cost, one row per project at most.
///
/// `$1` is the number of working hours per month.
const PROJECT_COST_CTES: &str = "\
    material_costs AS ( \
        SELECT project_id, SUM(quantity * unit_price) AS cost \
        FROM project_materials GROUP BY project_id \
    ), \
    labor_costs AS ( \
        SELECT wa.project_id, SUM(wa.hours_worked * e.salary / $1) AS cost \
        FROM work_assignments wa \
        JOIN employees e ON e.id = wa.employee_id \
        GROUP BY wa.project_id \
    )";

/// Statuses whose hours count toward team utilization.
fn in_progress_statuses() -> Vec<&'static str> {
    ProjectStatus::ALL
        .into_iter()
        .filter(|s| s.is_in_progress())
        .map(ProjectStatus::as_str)
        .collect()
}

/// Provides the six read-only reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Profit and margin per project.
    pub async fn profitability(pool: &PgPool) -> Result<Vec<ProfitabilityRow>, sqlx::Error> {
        let query = format!(
            "WITH {PROJECT_COST_CTES}
             SELECT p.id AS project_id, p.name AS project_name,
                    b.name AS branch_name, c.name AS client_name, p.revenue,
                    COALESCE(mc.cost, 0) AS material_cost,
                    COALESCE(lc.cost, 0) AS labor_cost
             FROM projects p
             JOIN branches b ON b.id = p.branch_id
             JOIN clients c ON c.id = p.client_id
             LEFT JOIN material_costs mc ON mc.project_id = p.id
             LEFT JOIN labor_costs lc ON lc.project_id = p.id"
        );
        let raw = sqlx::query_as::<_, ProfitabilityRaw>(&query)
            .bind(HOURS_PER_MONTH)
            .fetch_all(pool)
            .await?;
        Ok(build_profitability(raw))
    }

    /// Projects reached and material value per supplier, with dense ranks.
    pub async fn supplier_impact(pool: &PgPool) -> Result<Vec<SupplierImpactRow>, sqlx::Error> {
        let raw = sqlx::query_as::<_, SupplierImpactRaw>(
            "WITH supplier_projects AS (
                SELECT sm.supplier_id, pm.project_id,
                       SUM(pm.quantity * pm.unit_price) AS project_value
                FROM supplier_materials sm
                JOIN project_materials pm ON pm.material_id = sm.material_id
                WHERE sm.price <= pm.unit_price * $1
                GROUP BY sm.supplier_id, pm.project_id
             )
             SELECT s.id AS supplier_id, s.name AS supplier_name,
                    COUNT(sp.project_id) AS project_count,
                    COALESCE(SUM(sp.project_value), 0) AS total_value
             FROM suppliers s
             LEFT JOIN supplier_projects sp ON sp.supplier_id = s.id
             GROUP BY s.id, s.name
             ORDER BY s.id",
        )
        .bind(SUPPLIER_PRICE_TOLERANCE)
        .fetch_all(pool)
        .await?;
        Ok(build_supplier_impact(raw))
    }

    /// Spend per material with its share and top projects.
    pub async fn hot_materials(pool: &PgPool) -> Result<Vec<HotMaterialRow>, sqlx::Error> {
        let totals = sqlx::query_as::<_, MaterialTotalRaw>(
            "SELECT m.id AS material_id, m.name AS material_name,
                    SUM(pm.quantity * pm.unit_price) AS total_cost
             FROM materials m
             JOIN project_materials pm ON pm.material_id = m.id
             GROUP BY m.id, m.name",
        )
        .fetch_all(pool)
        .await?;

        let project_costs = sqlx::query_as::<_, MaterialProjectCostRaw>(
            "WITH ranked AS (
                SELECT pm.material_id, p.name AS project_name,
                       pm.quantity * pm.unit_price AS project_cost,
                       ROW_NUMBER() OVER (
                           PARTITION BY pm.material_id
                           ORDER BY pm.quantity * pm.unit_price DESC, p.name
                       ) AS rn
                FROM project_materials pm
                JOIN projects p ON p.id = pm.project_id
             )
             SELECT material_id, project_name, project_cost
             FROM ranked
             WHERE rn <= $1
             ORDER BY material_id, rn",
        )
        .bind(TOP_PROJECTS_PER_MATERIAL as i64)
        .fetch_all(pool)
        .await?;

        Ok(build_hot_materials(totals, project_costs))
    }

    /// Team size and in-progress hours per manager.
    pub async fn employee_utilization(
        pool: &PgPool,
    ) -> Result<Vec<EmployeeUtilizationRow>, sqlx::Error> {
        let statuses = in_progress_statuses();

        let teams = sqlx::query_as::<_, ManagerTeamRaw>(
            "WITH active_hours AS (
                SELECT wa.employee_id, SUM(wa.hours_worked) AS hours
                FROM work_assignments wa
                JOIN projects p ON p.id = wa.project_id
                WHERE p.status = ANY($1)
                GROUP BY wa.employee_id
             )
             SELECT m.id AS manager_id, m.name AS manager_name,
                    COUNT(*) AS subordinate_count,
                    COALESCE(SUM(ah.hours), 0) AS total_team_hours,
                    string_agg(s.name, ', ' ORDER BY s.name) AS subordinate_names
             FROM employees s
             JOIN employees m ON m.id = s.manager_id
             LEFT JOIN active_hours ah ON ah.employee_id = s.id
             GROUP BY m.id, m.name",
        )
        .bind(&statuses)
        .fetch_all(pool)
        .await?;

        let project_hours = sqlx::query_as::<_, ManagerProjectHoursRaw>(
            "SELECT s.manager_id, p.name AS project_name,
                    SUM(wa.hours_worked) AS team_project_hours
             FROM employees s
             JOIN work_assignments wa ON wa.employee_id = s.id
             JOIN projects p ON p.id = wa.project_id
             WHERE s.manager_id IS NOT NULL AND p.status = ANY($1)
             GROUP BY s.manager_id, p.id, p.name
             ORDER BY s.manager_id, team_project_hours DESC, p.name",
        )
        .bind(&statuses)
        .fetch_all(pool)
        .await?;

        Ok(build_employee_utilization(teams, project_hours))
    }

    /// Project material lines priced well above the cheapest supplier.
    pub async fn price_anomalies(pool: &PgPool) -> Result<Vec<PriceAnomalyRow>, sqlx::Error> {
        let raw = sqlx::query_as::<_, PriceAnomalyRaw>(
            "WITH supplier_prices AS (
                SELECT material_id, MIN(price) AS min_price, AVG(price) AS avg_price
                FROM supplier_materials
                GROUP BY material_id
             )
             SELECT pm.project_id, p.name AS project_name,
                    m.id AS material_id, m.name AS material_name, m.base_unit_price,
                    COALESCE(sp.min_price, 0) AS min_supplier_price,
                    COALESCE(sp.avg_price, 0) AS avg_supplier_price,
                    pm.unit_price AS project_unit_price, pm.quantity
             FROM project_materials pm
             JOIN materials m ON m.id = pm.material_id
             JOIN projects p ON p.id = pm.project_id
             LEFT JOIN supplier_prices sp ON sp.material_id = pm.material_id",
        )
        .fetch_all(pool)
        .await?;
        Ok(build_price_anomalies(raw))
    }

    /// Headcount, project counts, revenue, cost and profit per branch.
    pub async fn branch_performance(
        pool: &PgPool,
    ) -> Result<Vec<BranchPerformanceRow>, sqlx::Error> {
        let query = format!(
            "WITH {PROJECT_COST_CTES}
             SELECT b.id AS branch_id, b.name AS branch_name, b.city,
                    (SELECT COUNT(*) FROM employees e WHERE e.branch_id = b.id) AS employee_count,
                    COUNT(p.id) AS project_count,
                    COUNT(p.id) FILTER (WHERE p.status = $2) AS active_projects,
                    COUNT(p.id) FILTER (WHERE p.status = $3) AS completed_projects,
                    COALESCE(SUM(p.revenue), 0) AS total_revenue,
                    COALESCE(SUM(mc.cost), 0) AS total_material_cost,
                    COALESCE(SUM(lc.cost), 0) AS total_labor_cost,
                    mgr.name AS branch_manager_name
             FROM branches b
             LEFT JOIN projects p ON p.branch_id = b.id
             LEFT JOIN material_costs mc ON mc.project_id = p.id
             LEFT JOIN labor_costs lc ON lc.project_id = p.id
             LEFT JOIN branch_managers bm ON bm.branch_id = b.id
             LEFT JOIN employees mgr ON mgr.id = bm.employee_id
             GROUP BY b.id, b.name, b.city, mgr.name"
        );
        let raw = sqlx::query_as::<_, BranchPerformanceRaw>(&query)
            .bind(HOURS_PER_MONTH)
            .bind(ProjectStatus::Active.as_str())
            .bind(ProjectStatus::Completed.as_str())
            .fetch_all(pool)
            .await?;
        Ok(build_branch_performance(raw))
    }
}
