//! Handler for the dashboard summary.

use abaad_db::models::dashboard::DashboardSummary;
use abaad_db::repositories::DashboardRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Entity counts, total project revenue and the most recent projects.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}
