//! Handlers for the `/sections` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::content::validate_column_count;
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::reorder::OrderEntry;
use atelier_db::models::section::{CreateSection, Section, UpdateSection};
use atelier_db::repositories::{ProjectRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /projects/{id}/sections/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderSectionsRequest {
    pub section_orders: Vec<OrderEntry>,
}

/// POST /api/v1/sections
///
/// Create a section at the end of its project's section list.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSection>,
) -> AppResult<impl IntoResponse> {
    if let Some(column_count) = input.column_count {
        validate_column_count(column_count)?;
    }
    if ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }));
    }

    let section = SectionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        section_id = section.id,
        project_id = section.project_id,
        "Section created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/sections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<DataResponse<Section>>> {
    if let Some(column_count) = input.column_count {
        validate_column_count(column_count)?;
    }

    let section = SectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/sections/{id}
///
/// The section's elements cascade with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SectionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
    }
}

/// POST /api/v1/projects/{id}/sections/reorder
///
/// Apply a client-supplied section ordering within one project. Same
/// best-effort semantics as the project reorder.
pub async fn reorder_in_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(request): Json<ReorderSectionsRequest>,
) -> AppResult<impl IntoResponse> {
    if ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    let outcome = SectionRepo::reorder(&state.pool, project_id, &request.section_orders).await;
    Ok(Json(DataResponse { data: outcome }))
}
