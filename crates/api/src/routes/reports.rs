//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /profitability           -> profitability
/// GET /supplier-impact         -> supplier_impact
/// GET /hot-materials           -> hot_materials
/// GET /employee-utilization    -> employee_utilization
/// GET /price-anomalies         -> price_anomalies
/// GET /branch-performance      -> branch_performance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profitability", get(reports::profitability))
        .route("/supplier-impact", get(reports::supplier_impact))
        .route("/hot-materials", get(reports::hot_materials))
        .route("/employee-utilization", get(reports::employee_utilization))
        .route("/price-anomalies", get(reports::price_anomalies))
        .route("/branch-performance", get(reports::branch_performance))
}
