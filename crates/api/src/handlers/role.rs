//! Handlers for the `/roles` lookup resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank};
use abaad_db::models::role::{Role, RoleInput};
use abaad_db::repositories::RoleRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Role";

fn validate(input: &RoleInput) -> Result<String, CoreError> {
    non_blank(&input.title).ok_or_else(|| missing("Title required"))
}

/// GET /api/roles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /api/roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Role>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(role))
}

/// POST /api/roles
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<RoleInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let title = validate(&input)?;
    let id = RoleRepo::create(&state.pool, &title).await?;
    Ok((StatusCode::CREATED, Json(Created::new(ENTITY, "RoleID", id))))
}

/// PUT /api/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<RoleInput>,
) -> AppResult<Json<MessageResponse>> {
    let title = validate(&input)?;
    if !RoleRepo::update(&state.pool, id, &title).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/roles/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if RoleRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
