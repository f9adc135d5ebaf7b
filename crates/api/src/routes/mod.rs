pub mod about;
pub mod element;
pub mod health;
pub mod media;
pub mod project;
pub mod section;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                               list, create
/// /projects/reorder                       apply category-wide ordering (POST)
/// /projects/slug/{slug}                   get with nested content
/// /projects/{id}                          get, update, delete
/// /projects/{id}/sections/reorder         apply section ordering (POST)
///
/// /sections                               create
/// /sections/{id}                          update, delete
/// /sections/{id}/reorder                  apply element ordering (POST)
/// /sections/{id}/elements                 list, create
///
/// /elements/{id}                          update, delete
///
/// /media                                  list (?type=image|video)
/// /media/upload                           upload (POST, multipart)
/// /media/{id}                             delete
///
/// /about                                  get, replace (singleton)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/sections", section::router())
        .nest("/elements", element::router())
        .nest("/media", media::router())
        .nest("/about", about::router())
}
