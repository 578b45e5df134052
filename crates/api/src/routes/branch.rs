//! Route definitions for the `/branches` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::branch;
use crate::state::AppState;

/// Routes mounted at `/branches`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(branch::list).post(branch::create))
        .route(
            "/{id}",
            get(branch::get_by_id)
                .put(branch::update)
                .delete(branch::delete),
        )
}
