//! Handlers for the `/materials` catalog.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank, nonzero_amount, require_non_negative};
use abaad_db::models::material::{Material, MaterialInput, MaterialRecord};
use abaad_db::repositories::MaterialRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Material";

fn validate(input: &MaterialInput) -> Result<MaterialRecord, CoreError> {
    let (Some(name), Some(price)) = (non_blank(&input.name), nonzero_amount(input.base_unit_price))
    else {
        return Err(missing("MaterialName and BaseUnitPrice required"));
    };
    Ok(MaterialRecord {
        name,
        base_unit_price: require_non_negative(price, "BaseUnitPrice")?,
        unit_of_measure: non_blank(&input.unit_of_measure),
    })
}

/// GET /api/materials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Material>>> {
    let materials = MaterialRepo::list(&state.pool).await?;
    Ok(Json(materials))
}

/// GET /api/materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Material>> {
    let material = MaterialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(material))
}

/// POST /api/materials
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<MaterialInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = MaterialRepo::create(&state.pool, &record).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(ENTITY, "MaterialID", id)),
    ))
}

/// PUT /api/materials/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<MaterialInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !MaterialRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/materials/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if MaterialRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
