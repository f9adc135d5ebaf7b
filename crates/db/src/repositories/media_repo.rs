//! Repository for the `media` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::media::{CreateMediaItem, MediaItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, filename, original_name, file_type, file_size, mime_type, url, \
     storage_key, folder, created_at";

/// Provides CRUD operations for the media library.
pub struct MediaRepo;

impl MediaRepo {
    /// Record an uploaded object, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMediaItem) -> Result<MediaItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO media \
                (filename, original_name, file_type, file_size, mime_type, url, storage_key, folder) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(&input.filename)
            .bind(&input.original_name)
            .bind(&input.file_type)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(&input.url)
            .bind(&input.storage_key)
            .bind(&input.folder)
            .fetch_one(pool)
            .await
    }

    /// Find a media item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media items newest first, optionally filtered by file type
    /// (`image` or `video`).
    pub async fn list(
        pool: &PgPool,
        file_type: Option<&str>,
    ) -> Result<Vec<MediaItem>, sqlx::Error> {
        let query = match file_type {
            Some(_) => format!(
                "SELECT {COLUMNS} FROM media WHERE file_type = $1 ORDER BY created_at DESC"
            ),
            None => format!("SELECT {COLUMNS} FROM media ORDER BY created_at DESC"),
        };
        let mut q = sqlx::query_as::<_, MediaItem>(&query);
        if let Some(file_type) = file_type {
            q = q.bind(file_type);
        }
        q.fetch_all(pool).await
    }

    /// Delete a media row by ID. Returns `true` if a row was removed.
    ///
    /// The caller deletes the stored object first; the row only goes away
    /// once the object is no longer reachable.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
