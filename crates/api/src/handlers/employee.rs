//! Handlers for the `/employees` resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{
    missing, non_blank, nonzero_amount, positive_id, require_non_negative,
};
use abaad_db::models::employee::{Employee, EmployeeInput, EmployeeRecord};
use abaad_db::repositories::EmployeeRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Employee";

fn validate(input: &EmployeeInput) -> Result<EmployeeRecord, CoreError> {
    let (
        Some(name),
        Some(role_id),
        Some(salary),
        Some(branch_id),
        Some(department_id),
        Some(hire_date),
    ) = (
        non_blank(&input.name),
        positive_id(input.role_id),
        nonzero_amount(input.salary),
        positive_id(input.branch_id),
        positive_id(input.department_id),
        input.hire_date,
    )
    else {
        return Err(missing("Required fields missing"));
    };

    Ok(EmployeeRecord {
        name,
        role_id,
        salary: require_non_negative(salary, "Salary")?,
        branch_id,
        department_id,
        manager_id: positive_id(input.manager_id),
        hire_date,
        email: non_blank(&input.email),
        phone_number: non_blank(&input.phone_number),
    })
}

/// GET /api/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(employee))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<EmployeeInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = EmployeeRepo::create(&state.pool, &record).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(ENTITY, "EmployeeID", id)),
    ))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<EmployeeInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if record.manager_id == Some(id) {
        return Err(CoreError::Validation("An employee cannot manage themselves".into()).into());
    }
    if !EmployeeRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if EmployeeRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
