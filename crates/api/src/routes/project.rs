//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, section};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> create (multipart)
/// POST   /reorder                    -> reorder
/// GET    /slug/{slug}                -> get_by_slug
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update (multipart)
/// DELETE /{id}                       -> delete
/// POST   /{id}/sections/reorder      -> reorder sections within the project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/reorder", post(project::reorder))
        .route("/slug/{slug}", get(project::get_by_slug))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{id}/sections/reorder",
            post(section::reorder_in_project),
        )
}
