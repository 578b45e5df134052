//! Handlers for the `/clients` resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank};
use abaad_db::models::client::{Client, ClientInput, ClientRecord};
use abaad_db::repositories::ClientRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Client";

fn validate(input: &ClientInput) -> Result<ClientRecord, CoreError> {
    let Some(name) = non_blank(&input.name) else {
        return Err(missing("ClientName required"));
    };
    Ok(ClientRecord {
        name,
        contact_info: non_blank(&input.contact_info),
    })
}

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ClientInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = ClientRepo::create(&state.pool, &record).await?;
    Ok((StatusCode::CREATED, Json(Created::new(ENTITY, "ClientID", id))))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ClientInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !ClientRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ClientRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
