//! Media library entity model.
//!
//! A media row records an uploaded object's storage key and public URL. Rows
//! are independent of projects until an element references the URL.

use serde::Serialize;
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A media row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaItem {
    pub id: DbId,
    pub filename: String,
    pub original_name: String,
    /// Coarse classification derived from the mime type: `image`, `video`,
    /// or `file`.
    pub file_type: String,
    pub file_size: i64,
    pub mime_type: String,
    pub url: String,
    pub storage_key: String,
    pub folder: String,
    pub created_at: Timestamp,
}

/// Insert payload for a freshly uploaded object.
#[derive(Debug, Clone)]
pub struct CreateMediaItem {
    pub filename: String,
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub mime_type: String,
    pub url: String,
    pub storage_key: String,
    pub folder: String,
}
