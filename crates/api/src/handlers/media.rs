//! Handlers for the `/media` library.
//!
//! Uploads stream through multipart into object storage; the database row
//! records the key, public URL and a coarse file type for filtering.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::media::{CreateMediaItem, MediaItem};
use atelier_db::repositories::MediaRepo;
use atelier_storage::classify_file_type;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for media listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Filter by coarse file type (`image`, `video`, `file`).
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// GET /api/v1/media
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<MediaItem>>>> {
    let items = MediaRepo::list(&state.pool, params.file_type.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/media/upload
///
/// Accepts a multipart form with one `file` part. The object lands under
/// the `media/` folder with a fresh UUID key.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut uploaded: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .to_vec();
        uploaded = Some((original_name, mime_type, bytes));
    }

    let (original_name, mime_type, bytes) = uploaded
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field in upload".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let stored = state
        .store
        .upload("media", &original_name, &mime_type, bytes)
        .await?;

    // The stored filename is the UUID-based leaf of the key.
    let filename = stored
        .key
        .rsplit('/')
        .next()
        .unwrap_or(&stored.key)
        .to_string();

    let item = MediaRepo::create(
        &state.pool,
        &CreateMediaItem {
            filename,
            original_name,
            file_type: classify_file_type(&stored.mime_type).to_string(),
            file_size: stored.size,
            mime_type: stored.mime_type.clone(),
            url: stored.url.clone(),
            storage_key: stored.key.clone(),
            folder: "media".to_string(),
        },
    )
    .await?;

    tracing::info!(media_id = item.id, key = %item.storage_key, "Media uploaded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// DELETE /api/v1/media/{id}
///
/// Removes the stored object first, then the row. A missing id is a 404.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let item = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id,
        }))?;

    state.store.delete(&item.storage_key).await?;
    MediaRepo::delete(&state.pool, id).await?;

    tracing::info!(media_id = id, key = %item.storage_key, "Media deleted");
    Ok(StatusCode::NO_CONTENT)
}
