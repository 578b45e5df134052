//! Route definitions for the junction resources.
//!
//! Rows are keyed on a pair of ids: `POST` inserts or replaces the row for
//! the pair and `DELETE` addresses it by both ids.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{project_material, supplier_material, work_assignment};
use crate::state::AppState;

/// Routes mounted at `/work-assignments`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> upsert
/// DELETE /{project_id}/{employee_id}    -> delete
/// ```
pub fn work_assignment_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(work_assignment::list).post(work_assignment::upsert),
        )
        .route(
            "/{project_id}/{employee_id}",
            delete(work_assignment::delete),
        )
}

/// Routes mounted at `/project-materials`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> upsert
/// DELETE /{project_id}/{material_id}    -> delete
/// ```
pub fn project_material_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project_material::list).post(project_material::upsert),
        )
        .route(
            "/{project_id}/{material_id}",
            delete(project_material::delete),
        )
}

/// Routes mounted at `/supplier-materials`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> upsert
/// DELETE /{supplier_id}/{material_id}   -> delete
/// ```
pub fn supplier_material_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(supplier_material::list).post(supplier_material::upsert),
        )
        .route(
            "/{supplier_id}/{material_id}",
            delete(supplier_material::delete),
        )
}
