//! Handlers for the `/projects` resource and its detail sub-resources.

use abaad_core::error::CoreError;
use abaad_core::project_status::ProjectStatus;
use abaad_core::types::DbId;
use abaad_core::validation::{missing, non_blank, positive_id};
use abaad_db::models::project::{Project, ProjectInput, ProjectRecord};
use abaad_db::models::project_material::ProjectMaterial;
use abaad_db::models::work_assignment::WorkAssignment;
use abaad_db::repositories::{ProjectMaterialRepo, ProjectRepo, WorkAssignmentRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Created, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Check required fields and apply defaults: missing `Cost`/`Revenue`
/// become 0 and a missing `Status` becomes `Planning`.
fn validate(input: &ProjectInput) -> Result<ProjectRecord, CoreError> {
    let (Some(name), Some(branch_id), Some(client_id), Some(start_date)) = (
        non_blank(&input.name),
        positive_id(input.branch_id),
        positive_id(input.client_id),
        input.start_date,
    ) else {
        return Err(missing("ProjectName, BranchID, ClientID, StartDate required"));
    };

    if input.end_date.is_some_and(|end| end < start_date) {
        return Err(CoreError::Validation(
            "EndDate must not be before StartDate".into(),
        ));
    }

    Ok(ProjectRecord {
        name,
        location: non_blank(&input.location),
        cost: input.cost.unwrap_or(0.0),
        revenue: input.revenue.unwrap_or(0.0),
        branch_id,
        client_id,
        start_date,
        end_date: input.end_date,
        status: ProjectStatus::resolve(input.status.as_deref())?,
    })
}

/// 404 unless the project exists.
async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let record = validate(&input)?;
    let id = ProjectRepo::create(&state.pool, &record).await?;
    tracing::info!(project_id = id, status = %record.status, "Project created");
    Ok((
        StatusCode::CREATED,
        Json(Created::new(ENTITY, "ProjectID", id)),
    ))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<Json<MessageResponse>> {
    let record = validate(&input)?;
    if !ProjectRepo::update(&state.pool, id, &record).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    Ok(Json(MessageResponse::updated(ENTITY)))
}

/// DELETE /api/projects/{id}
///
/// Work assignments and material lines of the project go with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}

/// GET /api/projects/{id}/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<WorkAssignment>>> {
    ensure_exists(&state, id).await?;
    let assignments = WorkAssignmentRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(assignments))
}

/// GET /api/projects/{id}/materials
pub async fn list_materials(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<ProjectMaterial>>> {
    ensure_exists(&state, id).await?;
    let materials = ProjectMaterialRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(materials))
}
