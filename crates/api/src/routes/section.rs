//! Route definitions for the `/sections` resource.
//!
//! Element creation and listing is nested here because elements only exist
//! inside a section's columns.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{element, section};
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// POST   /                 -> create
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/reorder     -> reorder elements within the section
/// GET    /{id}/elements    -> list elements
/// POST   /{id}/elements    -> create element
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(section::create))
        .route("/{id}", put(section::update).delete(section::delete))
        .route("/{id}/reorder", post(element::reorder))
        .route(
            "/{id}/elements",
            get(element::list_by_section).post(element::create),
        )
}
