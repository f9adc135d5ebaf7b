//! Route definitions for the `/elements` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::element;
use crate::state::AppState;

/// Routes mounted at `/elements`.
///
/// ```text
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(element::update).delete(element::delete))
}
