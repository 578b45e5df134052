//! Handlers for the `/departments` resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank, positive_id};
use abaad_db::models::department::{Department, DepartmentInput, DepartmentRecord};
use abaad_db::repositories::DepartmentRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Department";

fn validate(input: &DepartmentInput) -> Result<DepartmentRecord, CoreError> {
    let Some(name) = non_blank(&input.name) else {
        return Err(missing("DepartmentName required"));
    };
    Ok(DepartmentRecord {
        name,
        manager_id: positive_id(input.manager_id),
    })
}

/// GET /api/departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(departments))
}

/// GET /api/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(department))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<DepartmentInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = DepartmentRepo::create(&state.pool, &record).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(ENTITY, "DepartmentID", id)),
    ))
}

/// PUT /api/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<DepartmentInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !DepartmentRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
