//! Report rows.
//!
//! Each report has a raw row (`*Raw`, read straight from SQL aggregates)
//! and an output row serialized to clients. The `build_*` functions turn
//! raw rows into output rows using the metrics in
//! [`abaad_core::reports`], then sort them.

use std::collections::HashMap;

use abaad_core::reports::{
    cmp_desc, dense_ranks, percentage_share, price_variance_percent, project_cost_label, round2,
    AnomalyLevel, ProfitSummary, TOP_PROJECTS_PER_MATERIAL,
};
use abaad_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Profitability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct ProfitabilityRaw {
    pub project_id: DbId,
    pub project_name: String,
    pub branch_name: String,
    pub client_name: String,
    pub revenue: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfitabilityRow {
    #[serde(rename = "ProjectID")]
    pub project_id: DbId,
    pub project_name: String,
    pub branch_name: String,
    pub client_name: String,
    pub revenue: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// Profit and margin per project, most profitable first.
pub fn build_profitability(raw: Vec<ProfitabilityRaw>) -> Vec<ProfitabilityRow> {
    let mut rows: Vec<ProfitabilityRow> = raw
        .into_iter()
        .map(|r| {
            let summary = ProfitSummary::compute(r.revenue, r.material_cost, r.labor_cost);
            ProfitabilityRow {
                project_id: r.project_id,
                project_name: r.project_name,
                branch_name: r.branch_name,
                client_name: r.client_name,
                revenue: round2(r.revenue),
                material_cost: round2(r.material_cost),
                labor_cost: round2(r.labor_cost),
                profit: round2(summary.profit),
                profit_margin: round2(summary.margin),
            }
        })
        .collect();
    rows.sort_by(|a, b| cmp_desc(a.profit, b.profit));
    rows
}

// ---------------------------------------------------------------------------
// Supplier impact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct SupplierImpactRaw {
    pub supplier_id: DbId,
    pub supplier_name: String,
    pub project_count: i64,
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupplierImpactRow {
    #[serde(rename = "SupplierID")]
    pub supplier_id: DbId,
    pub supplier_name: String,
    pub project_count: i64,
    pub total_value: f64,
    pub rank_by_project_count: u32,
    pub rank_by_value: u32,
}

/// Dense-ranks suppliers by reach and by value.
///
/// Ranking compares the rounded value so suppliers that display the same
/// amount share a rank.
pub fn build_supplier_impact(raw: Vec<SupplierImpactRaw>) -> Vec<SupplierImpactRow> {
    let stats: Vec<(i64, f64)> = raw
        .iter()
        .map(|r| (r.project_count, round2(r.total_value)))
        .collect();

    let by_count = dense_ranks(&stats, |a, b| b.0.cmp(&a.0).then(cmp_desc(a.1, b.1)));
    let by_value = dense_ranks(&stats, |a, b| cmp_desc(a.1, b.1).then(b.0.cmp(&a.0)));

    let mut rows: Vec<SupplierImpactRow> = raw
        .into_iter()
        .zip(by_count.into_iter().zip(by_value))
        .map(|(r, (rank_by_project_count, rank_by_value))| SupplierImpactRow {
            supplier_id: r.supplier_id,
            supplier_name: r.supplier_name,
            project_count: r.project_count,
            total_value: round2(r.total_value),
            rank_by_project_count,
            rank_by_value,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.project_count
            .cmp(&a.project_count)
            .then(cmp_desc(a.total_value, b.total_value))
    });
    rows
}

// ---------------------------------------------------------------------------
// Hot materials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct MaterialTotalRaw {
    pub material_id: DbId,
    pub material_name: String,
    pub total_cost: f64,
}

/// One project line for a material, already ordered by cost within the
/// material.
#[derive(Debug, Clone, FromRow)]
pub struct MaterialProjectCostRaw {
    pub material_id: DbId,
    pub project_name: String,
    pub project_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotMaterialRow {
    #[serde(rename = "MaterialID")]
    pub material_id: DbId,
    pub material_name: String,
    pub total_cost: f64,
    pub percentage_share: f64,
    pub top_project1: Option<String>,
    pub top_project2: Option<String>,
    pub top_project3: Option<String>,
}

/// Spend per material with its share of all material spend and the
/// largest project lines.
///
/// `project_costs` must be sorted by cost descending within each material;
/// only the first [`TOP_PROJECTS_PER_MATERIAL`] of each are used.
pub fn build_hot_materials(
    totals: Vec<MaterialTotalRaw>,
    project_costs: Vec<MaterialProjectCostRaw>,
) -> Vec<HotMaterialRow> {
    let grand_total: f64 = totals.iter().map(|t| t.total_cost).sum();

    let mut labels: HashMap<DbId, Vec<String>> = HashMap::new();
    for line in project_costs {
        let entry = labels.entry(line.material_id).or_default();
        if entry.len() < TOP_PROJECTS_PER_MATERIAL {
            entry.push(project_cost_label(&line.project_name, line.project_cost));
        }
    }

    let mut rows: Vec<HotMaterialRow> = totals
        .into_iter()
        .map(|t| {
            let mut top = labels.remove(&t.material_id).unwrap_or_default().into_iter();
            HotMaterialRow {
                material_id: t.material_id,
                material_name: t.material_name,
                total_cost: round2(t.total_cost),
                percentage_share: round2(percentage_share(t.total_cost, grand_total)),
                top_project1: top.next(),
                top_project2: top.next(),
                top_project3: top.next(),
            }
        })
        .collect();
    rows.sort_by(|a, b| cmp_desc(a.total_cost, b.total_cost));
    rows
}

// ---------------------------------------------------------------------------
// Employee utilization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct ManagerTeamRaw {
    pub manager_id: DbId,
    pub manager_name: String,
    pub subordinate_count: i64,
    pub total_team_hours: f64,
    pub subordinate_names: String,
}

/// A manager's team hours on one in-progress project.
#[derive(Debug, Clone, FromRow)]
pub struct ManagerProjectHoursRaw {
    pub manager_id: DbId,
    pub project_name: String,
    pub team_project_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeUtilizationRow {
    #[serde(rename = "ManagerID")]
    pub manager_id: DbId,
    pub manager_name: String,
    pub subordinate_count: i64,
    pub total_team_hours: f64,
    pub top_project_by_hours: Option<String>,
    pub top_project_hours: Option<f64>,
    pub subordinate_names: String,
}

/// Team size and in-progress hours per manager.
///
/// The top project is the one with the most team hours; ties keep the
/// first row seen.
pub fn build_employee_utilization(
    teams: Vec<ManagerTeamRaw>,
    project_hours: Vec<ManagerProjectHoursRaw>,
) -> Vec<EmployeeUtilizationRow> {
    let mut top: HashMap<DbId, ManagerProjectHoursRaw> = HashMap::new();
    for entry in project_hours {
        match top.get(&entry.manager_id) {
            Some(best) if best.team_project_hours >= entry.team_project_hours => {}
            _ => {
                top.insert(entry.manager_id, entry);
            }
        }
    }

    let mut rows: Vec<EmployeeUtilizationRow> = teams
        .into_iter()
        .map(|t| {
            let best = top.remove(&t.manager_id);
            EmployeeUtilizationRow {
                manager_id: t.manager_id,
                manager_name: t.manager_name,
                subordinate_count: t.subordinate_count,
                total_team_hours: round2(t.total_team_hours),
                top_project_hours: best.as_ref().map(|b| round2(b.team_project_hours)),
                top_project_by_hours: best.map(|b| b.project_name),
                subordinate_names: t.subordinate_names,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.subordinate_count
            .cmp(&a.subordinate_count)
            .then(cmp_desc(a.total_team_hours, b.total_team_hours))
    });
    rows
}

// ---------------------------------------------------------------------------
// Price anomalies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct PriceAnomalyRaw {
    pub project_id: DbId,
    pub project_name: String,
    pub material_id: DbId,
    pub material_name: String,
    pub base_unit_price: f64,
    /// Zero when no supplier lists the material.
    pub min_supplier_price: f64,
    pub avg_supplier_price: f64,
    pub project_unit_price: f64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceAnomalyRow {
    #[serde(rename = "ProjectID")]
    pub project_id: DbId,
    pub project_name: String,
    #[serde(rename = "MaterialID")]
    pub material_id: DbId,
    pub material_name: String,
    pub base_unit_price: f64,
    pub min_supplier_price: f64,
    pub avg_supplier_price: f64,
    pub project_unit_price: f64,
    pub quantity: f64,
    pub price_variance_percent: Option<f64>,
    pub deviation_from_base: f64,
    pub anomaly_level: AnomalyLevel,
    pub total_cost_impact: f64,
}

/// Project material lines paid well above the cheapest supplier price.
///
/// LOW lines are dropped. Sorted by variance, then by cost impact.
pub fn build_price_anomalies(raw: Vec<PriceAnomalyRaw>) -> Vec<PriceAnomalyRow> {
    let mut rows: Vec<PriceAnomalyRow> = raw
        .into_iter()
        .filter_map(|r| {
            let level = AnomalyLevel::classify(r.project_unit_price, r.min_supplier_price);
            if !level.is_reportable() {
                return None;
            }
            Some(PriceAnomalyRow {
                price_variance_percent: price_variance_percent(
                    r.project_unit_price,
                    r.min_supplier_price,
                )
                .map(round2),
                deviation_from_base: round2(r.project_unit_price - r.base_unit_price),
                anomaly_level: level,
                total_cost_impact: round2(r.project_unit_price * r.quantity),
                project_id: r.project_id,
                project_name: r.project_name,
                material_id: r.material_id,
                material_name: r.material_name,
                base_unit_price: r.base_unit_price,
                min_supplier_price: round2(r.min_supplier_price),
                avg_supplier_price: round2(r.avg_supplier_price),
                project_unit_price: r.project_unit_price,
                quantity: r.quantity,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        let va = a.price_variance_percent.unwrap_or(0.0);
        let vb = b.price_variance_percent.unwrap_or(0.0);
        cmp_desc(va, vb).then(cmp_desc(a.total_cost_impact, b.total_cost_impact))
    });
    rows
}

// ---------------------------------------------------------------------------
// Branch performance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct BranchPerformanceRaw {
    pub branch_id: DbId,
    pub branch_name: String,
    pub city: String,
    pub employee_count: i64,
    pub project_count: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub total_revenue: f64,
    pub total_material_cost: f64,
    pub total_labor_cost: f64,
    pub branch_manager_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BranchPerformanceRow {
    #[serde(rename = "BranchID")]
    pub branch_id: DbId,
    pub branch_name: String,
    pub city: String,
    pub employee_count: i64,
    pub project_count: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub total_revenue: f64,
    pub total_material_cost: f64,
    pub total_labor_cost: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub profit_margin: f64,
    pub branch_manager_name: Option<String>,
}

/// Per-branch totals, most profitable branch first.
pub fn build_branch_performance(raw: Vec<BranchPerformanceRaw>) -> Vec<BranchPerformanceRow> {
    let mut rows: Vec<BranchPerformanceRow> = raw
        .into_iter()
        .map(|r| {
            let summary =
                ProfitSummary::compute(r.total_revenue, r.total_material_cost, r.total_labor_cost);
            BranchPerformanceRow {
                branch_id: r.branch_id,
                branch_name: r.branch_name,
                city: r.city,
                employee_count: r.employee_count,
                project_count: r.project_count,
                active_projects: r.active_projects,
                completed_projects: r.completed_projects,
                total_revenue: round2(r.total_revenue),
                total_material_cost: round2(r.total_material_cost),
                total_labor_cost: round2(r.total_labor_cost),
                total_cost: round2(summary.total_cost),
                net_profit: round2(summary.profit),
                profit_margin: round2(summary.margin),
                branch_manager_name: r.branch_manager_name,
            }
        })
        .collect();
    rows.sort_by(|a, b| cmp_desc(a.net_profit, b.net_profit));
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: DbId, revenue: f64, material: f64, labor: f64) -> ProfitabilityRaw {
        ProfitabilityRaw {
            project_id: id,
            project_name: format!("Project {id}"),
            branch_name: "Riyadh HQ".into(),
            client_name: "Client".into(),
            revenue,
            material_cost: material,
            labor_cost: labor,
        }
    }

    fn supplier(id: DbId, count: i64, value: f64) -> SupplierImpactRaw {
        SupplierImpactRaw {
            supplier_id: id,
            supplier_name: format!("Supplier {id}"),
            project_count: count,
            total_value: value,
        }
    }

    fn line(project_id: DbId, paid: f64, min: f64, quantity: f64) -> PriceAnomalyRaw {
        PriceAnomalyRaw {
            project_id,
            project_name: format!("Project {project_id}"),
            material_id: 1,
            material_name: "Cement".into(),
            base_unit_price: 95.0,
            min_supplier_price: min,
            avg_supplier_price: min,
            project_unit_price: paid,
            quantity,
        }
    }

    // -- profitability --

    #[test]
    fn profitability_computes_profit_and_margin() {
        let rows = build_profitability(vec![project(1, 1000.0, 300.0, 200.0)]);
        assert_eq!(rows[0].profit, 500.0);
        assert_eq!(rows[0].profit_margin, 50.0);
    }

    #[test]
    fn profitability_sorted_by_profit_desc() {
        let rows = build_profitability(vec![
            project(1, 100.0, 90.0, 0.0),
            project(2, 0.0, 50.0, 0.0),
            project(3, 5000.0, 1000.0, 0.0),
        ]);
        let ids: Vec<DbId> = rows.iter().map(|r| r.project_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(rows[2].profit_margin, 0.0);
    }

    // -- supplier impact --

    #[test]
    fn supplier_ranks_are_dense() {
        let rows = build_supplier_impact(vec![
            supplier(1, 2, 500.0),
            supplier(2, 3, 100.0),
            supplier(3, 2, 500.0),
            supplier(4, 0, 0.0),
        ]);

        let ids: Vec<DbId> = rows.iter().map(|r| r.supplier_id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);

        let by_count: Vec<u32> = rows.iter().map(|r| r.rank_by_project_count).collect();
        assert_eq!(by_count, vec![1, 2, 2, 3]);

        let by_value: HashMap<DbId, u32> =
            rows.iter().map(|r| (r.supplier_id, r.rank_by_value)).collect();
        assert_eq!(by_value[&1], 1);
        assert_eq!(by_value[&3], 1);
        assert_eq!(by_value[&2], 2);
        assert_eq!(by_value[&4], 3);
    }

    // -- hot materials --

    #[test]
    fn hot_materials_share_and_top_projects() {
        let totals = vec![
            MaterialTotalRaw {
                material_id: 1,
                material_name: "Cement".into(),
                total_cost: 7500.0,
            },
            MaterialTotalRaw {
                material_id: 2,
                material_name: "Steel".into(),
                total_cost: 2500.0,
            },
        ];
        let costs = vec![
            MaterialProjectCostRaw {
                material_id: 1,
                project_name: "A".into(),
                project_cost: 4000.0,
            },
            MaterialProjectCostRaw {
                material_id: 1,
                project_name: "B".into(),
                project_cost: 2000.0,
            },
            MaterialProjectCostRaw {
                material_id: 1,
                project_name: "C".into(),
                project_cost: 1000.0,
            },
            MaterialProjectCostRaw {
                material_id: 1,
                project_name: "D".into(),
                project_cost: 500.0,
            },
            MaterialProjectCostRaw {
                material_id: 2,
                project_name: "A".into(),
                project_cost: 2500.0,
            },
        ];

        let rows = build_hot_materials(totals, costs);
        assert_eq!(rows[0].material_name, "Cement");
        assert_eq!(rows[0].percentage_share, 75.0);
        assert_eq!(rows[0].top_project1.as_deref(), Some("A (4,000.00)"));
        assert_eq!(rows[0].top_project3.as_deref(), Some("C (1,000.00)"));
        assert_eq!(rows[1].percentage_share, 25.0);
        assert_eq!(rows[1].top_project2, None);
    }

    // -- employee utilization --

    #[test]
    fn utilization_picks_top_project_per_manager() {
        let teams = vec![
            ManagerTeamRaw {
                manager_id: 1,
                manager_name: "Ahmed".into(),
                subordinate_count: 2,
                total_team_hours: 300.0,
                subordinate_names: "Omar, Sara".into(),
            },
            ManagerTeamRaw {
                manager_id: 2,
                manager_name: "Khalid".into(),
                subordinate_count: 2,
                total_team_hours: 0.0,
                subordinate_names: "Faisal, Huda".into(),
            },
        ];
        let hours = vec![
            ManagerProjectHoursRaw {
                manager_id: 1,
                project_name: "Tower".into(),
                team_project_hours: 120.0,
            },
            ManagerProjectHoursRaw {
                manager_id: 1,
                project_name: "Mall".into(),
                team_project_hours: 180.0,
            },
        ];

        let rows = build_employee_utilization(teams, hours);
        assert_eq!(rows[0].manager_id, 1);
        assert_eq!(rows[0].top_project_by_hours.as_deref(), Some("Mall"));
        assert_eq!(rows[0].top_project_hours, Some(180.0));
        assert_eq!(rows[1].top_project_by_hours, None);
        assert_eq!(rows[1].top_project_hours, None);
    }

    // -- price anomalies --

    #[test]
    fn anomalies_keep_high_and_medium_only() {
        let rows = build_price_anomalies(vec![
            line(1, 121.0, 100.0, 10.0),
            line(2, 115.0, 100.0, 10.0),
            line(3, 105.0, 100.0, 10.0),
            line(4, 500.0, 0.0, 10.0),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].project_id, 1);
        assert_eq!(rows[0].anomaly_level, AnomalyLevel::High);
        assert_eq!(rows[0].price_variance_percent, Some(21.0));
        assert_eq!(rows[0].total_cost_impact, 1210.0);
        assert_eq!(rows[0].deviation_from_base, 26.0);
        assert_eq!(rows[1].anomaly_level, AnomalyLevel::Medium);
    }

    #[test]
    fn anomalies_tie_break_on_cost_impact() {
        let rows = build_price_anomalies(vec![
            line(1, 130.0, 100.0, 1.0),
            line(2, 130.0, 100.0, 50.0),
        ]);
        assert_eq!(rows[0].project_id, 2);
    }

    // -- branch performance --

    #[test]
    fn branch_performance_sorted_by_net_profit() {
        let raw = |id: DbId, revenue: f64, material: f64| BranchPerformanceRaw {
            branch_id: id,
            branch_name: format!("Branch {id}"),
            city: "Riyadh".into(),
            employee_count: 1,
            project_count: 1,
            active_projects: 1,
            completed_projects: 0,
            total_revenue: revenue,
            total_material_cost: material,
            total_labor_cost: 0.0,
            branch_manager_name: None,
        };

        let rows = build_branch_performance(vec![raw(1, 100.0, 200.0), raw(2, 1000.0, 250.0)]);
        assert_eq!(rows[0].branch_id, 2);
        assert_eq!(rows[0].net_profit, 750.0);
        assert_eq!(rows[0].profit_margin, 75.0);
        assert_eq!(rows[1].net_profit, -100.0);
    }
}
