//! Repository for the `sections` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::reorder::{OrderEntry, ReorderOutcome};
use crate::models::section::{CreateSection, Section, UpdateSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, column_count, order_index, created_at, updated_at";

/// Provides CRUD and reorder operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section, returning the created row.
    ///
    /// The order index is one past the project's current maximum, or 0 for
    /// the first section. Title defaults to `'New Section'`, column count
    /// to 1 (the handler validates the range before calling in).
    pub async fn create(pool: &PgPool, input: &CreateSection) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (project_id, title, column_count, order_index) \
             VALUES ($1, COALESCE($2, 'New Section'), COALESCE($3, 1), \
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM sections WHERE project_id = $1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.column_count)
            .fetch_one(pool)
            .await
    }

    /// Find a section by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's sections ordered by position.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections WHERE project_id = $1 ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a section. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET \
                title = COALESCE($2, title), \
                column_count = COALESCE($3, column_count), \
                order_index = COALESCE($4, order_index), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.column_count)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section by ID. Its elements cascade with it.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a client-supplied section ordering within one project.
    ///
    /// Same best-effort semantics as [`ProjectRepo::reorder`]: one UPDATE per
    /// entry, list order, no transaction, failures recorded but never abort
    /// the loop. Entries whose id is not a section of `project_id` count as
    /// failed.
    ///
    /// [`ProjectRepo::reorder`]: crate::repositories::ProjectRepo::reorder
    pub async fn reorder(
        pool: &PgPool,
        project_id: DbId,
        entries: &[OrderEntry],
    ) -> ReorderOutcome {
        let mut outcome = ReorderOutcome::default();
        for entry in entries {
            let applied = sqlx::query(
                "UPDATE sections SET order_index = $3, updated_at = NOW() \
                 WHERE id = $1 AND project_id = $2",
            )
            .bind(entry.id)
            .bind(project_id)
            .bind(entry.order_index)
            .execute(pool)
            .await;

            match applied {
                Ok(result) if result.rows_affected() > 0 => outcome.updated += 1,
                Ok(_) => {
                    tracing::warn!(
                        id = entry.id,
                        project_id,
                        "Section reorder target not found in project"
                    );
                    outcome.failed.push(entry.id);
                }
                Err(err) => {
                    tracing::warn!(id = entry.id, error = %err, "Section reorder update failed");
                    outcome.failed.push(entry.id);
                }
            }
        }
        outcome
    }
}
