//! Route definitions for the `/materials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::material;
use crate::state::AppState;

/// Routes mounted at `/materials`.
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
        .route("/", get(material::list).post(material::create))
        .route(
            "/{id}",
            get(material::get_by_id)
                .put(material::update)
                .delete(material::delete),
        )
}
