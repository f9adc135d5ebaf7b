//! Handlers for section elements.
//!
//! Elements live in a section's columns. Creation validates the type and
//! column against the parent section, and embed links are normalized to
//! their iframe-safe form before they are stored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::content::{validate_column_index, ElementType};
use atelier_core::embed::normalize_embed_url;
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::element::{CreateElement, SectionElement, UpdateElement};
use atelier_db::models::reorder::ElementOrderEntry;
use atelier_db::models::section::Section;
use atelier_db::repositories::{ElementRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /sections/{id}/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderElementsRequest {
    pub element_orders: Vec<ElementOrderEntry>,
}

/// The canonical embed fields for a stored element: `(embed_url, embed_type)`.
///
/// For `embed` elements the URL must normalize against a supported platform;
/// any other type stores the URL untouched with no platform tag.
fn resolve_embed(
    element_type: &str,
    embed_url: Option<&str>,
) -> Result<(Option<String>, Option<String>), CoreError> {
    match embed_url {
        Some(url) if element_type == "embed" && !url.trim().is_empty() => {
            let info = normalize_embed_url(url)?;
            Ok((Some(info.embed_url), Some(info.embed_type.to_string())))
        }
        Some(url) => Ok((Some(url.to_string()), None)),
        None => Ok((None, None)),
    }
}

async fn find_section(pool: &sqlx::PgPool, id: DbId) -> AppResult<Section> {
    SectionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
}

/// GET /api/v1/sections/{id}/elements
///
/// List a section's elements ordered by column, then position.
pub async fn list_by_section(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SectionElement>>>> {
    find_section(&state.pool, section_id).await?;
    let elements = ElementRepo::list_by_section(&state.pool, section_id).await?;
    Ok(Json(DataResponse { data: elements }))
}

/// POST /api/v1/sections/{id}/elements
///
/// Create an element at the end of its (section, column) scope.
pub async fn create(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(input): Json<CreateElement>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state.pool, section_id).await?;

    ElementType::from_name(&input.element_type)?;
    validate_column_index(input.column_index, section.column_count)?;
    let (embed_url, embed_type) = resolve_embed(&input.element_type, input.embed_url.as_deref())?;

    let element = ElementRepo::create(
        &state.pool,
        section_id,
        &input,
        embed_url.as_deref(),
        embed_type.as_deref(),
    )
    .await?;

    tracing::info!(
        element_id = element.id,
        section_id,
        element_type = %element.element_type,
        "Element created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: element })))
}

/// PUT /api/v1/elements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateElement>,
) -> AppResult<Json<DataResponse<SectionElement>>> {
    let existing = ElementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Element",
            id,
        }))?;

    if let Some(element_type) = &input.element_type {
        ElementType::from_name(element_type)?;
    }
    if let Some(column_index) = input.column_index {
        let section = find_section(&state.pool, existing.section_id).await?;
        validate_column_index(column_index, section.column_count)?;
    }

    // Normalization keys off the type the element will have after the
    // update. The final platform tag is always computed here: leaving a tag
    // behind on an element that is no longer an embed would be stale.
    let effective_type = input
        .element_type
        .as_deref()
        .unwrap_or(&existing.element_type);
    let (embed_url, embed_type) = if effective_type == "embed" {
        match input.embed_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                let info = normalize_embed_url(url)?;
                (Some(info.embed_url), Some(info.embed_type.to_string()))
            }
            None => (None, existing.embed_type.clone()),
        }
    } else {
        (input.embed_url.clone(), None)
    };

    let element = ElementRepo::update(
        &state.pool,
        id,
        &input,
        embed_url.as_deref(),
        embed_type.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Element",
        id,
    }))?;
    Ok(Json(DataResponse { data: element }))
}

/// DELETE /api/v1/elements/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ElementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Element",
            id,
        }))
    }
}

/// POST /api/v1/sections/{id}/reorder
///
/// Apply a client-supplied element ordering (and optional column moves)
/// within one section. Entries are persisted independently; the outcome
/// lists the ids that did not apply.
pub async fn reorder(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(request): Json<ReorderElementsRequest>,
) -> AppResult<impl IntoResponse> {
    find_section(&state.pool, section_id).await?;
    let outcome = ElementRepo::reorder(&state.pool, section_id, &request.element_orders).await;
    Ok(Json(DataResponse { data: outcome }))
}
