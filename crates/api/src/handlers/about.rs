//! Handlers for the singleton about page.

use axum::extract::State;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_db::models::about::{About, UpdateAbout};
use atelier_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/about
///
/// 404 until content has been written at least once.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DataResponse<About>>> {
    let about = AboutRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "About",
            id: 1,
        }))?;
    Ok(Json(DataResponse { data: about }))
}

/// PUT /api/v1/about
///
/// Replaces the content, creating the row on first write.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateAbout>,
) -> AppResult<Json<DataResponse<About>>> {
    let about = AboutRepo::upsert(&state.pool, &input.content).await?;
    Ok(Json(DataResponse { data: about }))
}
