//! Handlers for the `/branches` resource.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank, positive_id};
use abaad_db::models::branch::{Branch, BranchInput, BranchRecord};
use abaad_db::repositories::BranchRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Branch";

/// Check required fields and normalize optionals.
fn validate(input: &BranchInput) -> Result<BranchRecord, CoreError> {
    let (Some(name), Some(city)) = (non_blank(&input.name), non_blank(&input.city)) else {
        return Err(missing("BranchName and City required"));
    };
    Ok(BranchRecord {
        name,
        city,
        address: non_blank(&input.address),
        phone_number: non_blank(&input.phone_number),
        manager_id: positive_id(input.manager_id),
    })
}

/// GET /api/branches
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Branch>>> {
    let branches = BranchRepo::list(&state.pool).await?;
    Ok(Json(branches))
}

/// GET /api/branches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Branch>> {
    let branch = BranchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(branch))
}

/// POST /api/branches
///
/// A `ManagerID` in the body assigns the manager in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<BranchInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = BranchRepo::create(&state.pool, &record).await?;
    tracing::info!(branch_id = id, manager_id = ?record.manager_id, "Branch created");
    Ok((StatusCode::CREATED, Json(Created::new(ENTITY, "BranchID", id))))
}

/// PUT /api/branches/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<BranchInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !BranchRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/branches/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if BranchRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn city_is_required() {
        let input = BranchInput {
            name: Some("Riyadh HQ".into()),
            city: Some("  ".into()),
            ..Default::default()
        };
        assert_matches!(
            validate(&input),
            Err(CoreError::Validation(msg)) if msg == "BranchName and City required"
        );
    }

    #[test]
    fn zero_manager_id_means_no_manager() {
        let input = BranchInput {
            name: Some("Riyadh HQ".into()),
            city: Some("Riyadh".into()),
            address: Some("".into()),
            manager_id: Some(0),
            ..Default::default()
        };
        let record = validate(&input).unwrap();
        assert_eq!(record.manager_id, None);
        assert_eq!(record.address, None);
    }
}
