//! Handlers for `/project-materials`, the material lines of a project.

use abaad_core::error::CoreError;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, nonzero_amount, positive_id, require_positive};
use abaad_db::models::project_material::{
    ProjectMaterial, ProjectMaterialInput, ProjectMaterialRecord,
};
use abaad_db::repositories::ProjectMaterialRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "ProjectMaterial";

fn validate(input: &ProjectMaterialInput) -> Result<ProjectMaterialRecord, CoreError> {
    let (Some(project_id), Some(material_id), Some(quantity), Some(unit_price)) = (
        positive_id(input.project_id),
        positive_id(input.material_id),
        nonzero_amount(input.quantity),
        nonzero_amount(input.unit_price),
    ) else {
        return Err(missing("ProjectID, MaterialID, Quantity, UnitPrice required"));
    };

    Ok(ProjectMaterialRecord {
        project_id,
        material_id,
        quantity: require_positive(quantity, "Quantity")?,
        unit_price: require_positive(unit_price, "UnitPrice")?,
    })
}

/// GET /api/project-materials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectMaterial>>> {
    let lines = ProjectMaterialRepo::list(&state.pool).await?;
    Ok(Json(lines))
}

/// POST /api/project-materials
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectMaterialInput>,
) -> AppResult<Json<ProjectMaterial>> {
    let record = validate(&input)?;
    let line = ProjectMaterialRepo::upsert(&state.pool, &record).await?;
    Ok(Json(line))
}

/// DELETE /api/project-materials/{project_id}/{material_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((project_id, material_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if ProjectMaterialRepo::delete(&state.pool, project_id, material_id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found_composite(
            ENTITY,
            project_id,
            material_id,
        )))
    }
}
