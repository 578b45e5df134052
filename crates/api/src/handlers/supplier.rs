//! Handlers for the `/suppliers` resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank};
use abaad_db::models::supplier::{Supplier, SupplierInput, SupplierRecord};
use abaad_db::repositories::SupplierRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Supplier";

fn validate(input: &SupplierInput) -> Result<SupplierRecord, CoreError> {
    let Some(name) = non_blank(&input.name) else {
        return Err(missing("SupplierName required"));
    };
    Ok(SupplierRecord {
        name,
        contact_info: non_blank(&input.contact_info),
    })
}

/// GET /api/suppliers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = SupplierRepo::list(&state.pool).await?;
    Ok(Json(suppliers))
}

/// GET /api/suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Supplier>> {
    let supplier = SupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(supplier))
}

/// POST /api/suppliers
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = SupplierRepo::create(&state.pool, &record).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(ENTITY, "SupplierID", id)),
    ))
}

/// PUT /api/suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !SupplierRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/suppliers/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if SupplierRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
