//! Handlers for the read-only report endpoints under `/reports`.
//!
//! Each report is computed on request; nothing is cached.

use abaad_db::models::report::{
    BranchPerformanceRow, EmployeeUtilizationRow, HotMaterialRow, PriceAnomalyRow,
    ProfitabilityRow, SupplierImpactRow,
};
use abaad_db::repositories::ReportRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/reports/profitability
pub async fn profitability(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProfitabilityRow>>> {
    let rows = ReportRepo::profitability(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/supplier-impact
pub async fn supplier_impact(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SupplierImpactRow>>> {
    let rows = ReportRepo::supplier_impact(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/hot-materials
pub async fn hot_materials(State(state): State<AppState>) -> AppResult<Json<Vec<HotMaterialRow>>> {
    let rows = ReportRepo::hot_materials(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/employee-utilization
pub async fn employee_utilization(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeUtilizationRow>>> {
    let rows = ReportRepo::employee_utilization(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/price-anomalies
pub async fn price_anomalies(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PriceAnomalyRow>>> {
    let rows = ReportRepo::price_anomalies(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/branch-performance
pub async fn branch_performance(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BranchPerformanceRow>>> {
    let rows = ReportRepo::branch_performance(&state.pool).await?;
    Ok(Json(rows))
}
