//! Route definitions for the `/media` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /           -> list (?type=image|video)
/// POST   /upload     -> upload (multipart)
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list))
        .route("/upload", post(media::upload))
        .route("/{id}", delete(media::delete))
}
