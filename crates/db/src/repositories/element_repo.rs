//! Repository for the `section_elements` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::element::{CreateElement, SectionElement, UpdateElement};
use crate::models::reorder::{ElementOrderEntry, ReorderOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_id, element_type, column_index, order_index, content, \
     media_url, alt_text, caption, embed_url, embed_type, created_at, updated_at";

/// Provides CRUD and reorder operations for section elements.
pub struct ElementRepo;

impl ElementRepo {
    /// Insert a new element, returning the created row.
    ///
    /// The order index is one past the current maximum within the
    /// (section, column) scope, or 0 for the first element there. The
    /// handler has already validated the type and column and normalized
    /// `embed_url`/`embed_type`, which are passed separately so the stored
    /// values are always the canonical forms.
    pub async fn create(
        pool: &PgPool,
        section_id: DbId,
        input: &CreateElement,
        embed_url: Option<&str>,
        embed_type: Option<&str>,
    ) -> Result<SectionElement, sqlx::Error> {
        let query = format!(
            "INSERT INTO section_elements \
                (section_id, element_type, column_index, order_index, content, media_url, \
                 alt_text, caption, embed_url, embed_type) \
             VALUES ($1, $2, $3, \
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM section_elements \
                 WHERE section_id = $1 AND column_index = $3), \
                COALESCE($4, ''), $5, COALESCE($6, ''), COALESCE($7, ''), $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SectionElement>(&query)
            .bind(section_id)
            .bind(&input.element_type)
            .bind(input.column_index)
            .bind(&input.content)
            .bind(&input.media_url)
            .bind(&input.alt_text)
            .bind(&input.caption)
            .bind(embed_url)
            .bind(embed_type)
            .fetch_one(pool)
            .await
    }

    /// Find an element by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SectionElement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM section_elements WHERE id = $1");
        sqlx::query_as::<_, SectionElement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a section's elements ordered by column, then position.
    pub async fn list_by_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<SectionElement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM section_elements WHERE section_id = $1 \
             ORDER BY column_index ASC, order_index ASC"
        );
        sqlx::query_as::<_, SectionElement>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Update an element. Only non-`None` fields in `input` are applied,
    /// except `embed_type`: the handler computes the final platform tag
    /// (including clearing it when the element stops being an embed), so it
    /// is written as given.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateElement,
        embed_url: Option<&str>,
        embed_type: Option<&str>,
    ) -> Result<Option<SectionElement>, sqlx::Error> {
        let query = format!(
            "UPDATE section_elements SET \
                element_type = COALESCE($2, element_type), \
                column_index = COALESCE($3, column_index), \
                order_index = COALESCE($4, order_index), \
                content = COALESCE($5, content), \
                media_url = COALESCE($6, media_url), \
                alt_text = COALESCE($7, alt_text), \
                caption = COALESCE($8, caption), \
                embed_url = COALESCE($9, embed_url), \
                embed_type = $10, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SectionElement>(&query)
            .bind(id)
            .bind(&input.element_type)
            .bind(input.column_index)
            .bind(input.order_index)
            .bind(&input.content)
            .bind(&input.media_url)
            .bind(&input.alt_text)
            .bind(&input.caption)
            .bind(embed_url)
            .bind(embed_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete an element by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM section_elements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a client-supplied element ordering within one section.
    ///
    /// One UPDATE per entry, list order, no transaction; an entry may also
    /// move the element to a different column. A failing entry is recorded
    /// and the loop continues. Entries whose id is not an element of
    /// `section_id` count as failed.
    pub async fn reorder(
        pool: &PgPool,
        section_id: DbId,
        entries: &[ElementOrderEntry],
    ) -> ReorderOutcome {
        let mut outcome = ReorderOutcome::default();
        for entry in entries {
            let applied = sqlx::query(
                "UPDATE section_elements SET \
                    order_index = $3, \
                    column_index = COALESCE($4, column_index), \
                    updated_at = NOW() \
                 WHERE id = $1 AND section_id = $2",
            )
            .bind(entry.id)
            .bind(section_id)
            .bind(entry.order_index)
            .bind(entry.column_index)
            .execute(pool)
            .await;

            match applied {
                Ok(result) if result.rows_affected() > 0 => outcome.updated += 1,
                Ok(_) => {
                    tracing::warn!(
                        id = entry.id,
                        section_id,
                        "Element reorder target not found in section"
                    );
                    outcome.failed.push(entry.id);
                }
                Err(err) => {
                    tracing::warn!(id = entry.id, error = %err, "Element reorder update failed");
                    outcome.failed.push(entry.id);
                }
            }
        }
        outcome
    }
}
