//! Repository for the singleton `about` row.

use sqlx::PgPool;

use crate::models::about::About;

const COLUMNS: &str = "id, content, updated_at";

/// The about page is a single row with id = 1; writes upsert it.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the about row, if one has ever been written.
    pub async fn get(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about WHERE id = 1");
        sqlx::query_as::<_, About>(&query).fetch_optional(pool).await
    }

    /// Replace the about content, creating the row on first write.
    pub async fn upsert(pool: &PgPool, content: &str) -> Result<About, sqlx::Error> {
        let query = format!(
            "INSERT INTO about (id, content) VALUES (1, $1) \
             ON CONFLICT (id) DO UPDATE SET content = EXCLUDED.content, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
