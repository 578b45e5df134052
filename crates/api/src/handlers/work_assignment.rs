//! Handlers for `/work-assignments`, the employee-on-project junction.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank, positive_id, require_non_negative};
use abaad_db::models::work_assignment::{
    WorkAssignment, WorkAssignmentInput, WorkAssignmentRecord,
};
use abaad_db::repositories::WorkAssignmentRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "WorkAssignment";

fn validate(input: &WorkAssignmentInput) -> Result<WorkAssignmentRecord, CoreError> {
    let (Some(project_id), Some(employee_id), Some(role), Some(start_date)) = (
        positive_id(input.project_id),
        positive_id(input.employee_id),
        non_blank(&input.role),
        input.start_date,
    ) else {
        return Err(missing("ProjectID, EmployeeID, Role, StartDate required"));
    };

    Ok(WorkAssignmentRecord {
        project_id,
        employee_id,
        role,
        hours_worked: require_non_negative(input.hours_worked.unwrap_or(0.0), "HoursWorked")?,
        start_date,
        end_date: input.end_date,
    })
}

/// GET /api/work-assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WorkAssignment>>> {
    let assignments = WorkAssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// POST /api/work-assignments
///
/// Replaces any existing assignment of the employee to the project.
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<WorkAssignmentInput>,
) -> AppResult<Json<WorkAssignment>> {
    let record = validate(&input)?;
    let assignment = WorkAssignmentRepo::upsert(&state.pool, &record).await?;
    Ok(Json(assignment))
}

/// DELETE /api/work-assignments/{project_id}/{employee_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((project_id, employee_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if WorkAssignmentRepo::delete(&state.pool, project_id, employee_id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found_composite(
            ENTITY,
            project_id,
            employee_id,
        )))
    }
}
