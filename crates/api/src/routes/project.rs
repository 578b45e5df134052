//! Route definitions for the `/projects` resource.
//!
//! Besides plain CRUD, a project exposes its work assignments and
//! material lines as read-only detail lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
///
/// GET    /{id}/assignments    -> list_assignments
/// GET    /{id}/materials      -> list_materials
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/assignments", get(project::list_assignments))
        .route("/{id}/materials", get(project::list_materials))
}
