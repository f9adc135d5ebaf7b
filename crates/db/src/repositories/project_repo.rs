//! Repository for the `projects` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::reorder::{OrderEntry, ReorderOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, year, category, slug, main_image_url, \
     main_image_key, coming_soon, order_index, created_at, updated_at";

/// Provides CRUD and reorder operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// The order index is assigned within the project's category: one past
    /// the current maximum, or 0 for the first project in that category.
    /// Racing inserts may produce ties; ordering is relative, so ties are
    /// tolerated and resolved by `created_at`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
        main_image_url: Option<&str>,
        main_image_key: Option<&str>,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (title, subtitle, year, category, slug, main_image_url, main_image_key, \
                 coming_soon, order_index) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, \
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM projects WHERE category = $4)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.year)
            .bind(&input.category)
            .bind(slug)
            .bind(main_image_url)
            .bind(main_image_key)
            .bind(input.coming_soon)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects, optionally restricted to a category.
    ///
    /// Ordered by order_index ascending, then newest first for ties.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = match category {
            Some(_) => format!(
                "SELECT {COLUMNS} FROM projects WHERE category = $1 \
                 ORDER BY order_index ASC, created_at DESC"
            ),
            None => format!(
                "SELECT {COLUMNS} FROM projects ORDER BY order_index ASC, created_at DESC"
            ),
        };
        let mut q = sqlx::query_as::<_, Project>(&query);
        if let Some(category) = category {
            q = q.bind(category);
        }
        q.fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    /// The slug is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                subtitle = COALESCE($3, subtitle), \
                year = COALESCE($4, year), \
                category = COALESCE($5, category), \
                coming_soon = COALESCE($6, coming_soon), \
                main_image_url = COALESCE($7, main_image_url), \
                main_image_key = COALESCE($8, main_image_key), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.year)
            .bind(&input.category)
            .bind(input.coming_soon)
            .bind(&input.main_image_url)
            .bind(&input.main_image_key)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Sections and elements go with it via the
    /// `ON DELETE CASCADE` declarations. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a client-supplied ordering, one independent UPDATE per entry.
    ///
    /// Entries are processed in list order without a transaction; a failing
    /// entry is recorded and the loop continues, so a mid-batch failure
    /// leaves earlier entries applied. The caller is responsible for sending
    /// the full sibling set.
    pub async fn reorder(pool: &PgPool, entries: &[OrderEntry]) -> ReorderOutcome {
        let mut outcome = ReorderOutcome::default();
        for entry in entries {
            let applied = sqlx::query(
                "UPDATE projects SET order_index = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(entry.id)
            .bind(entry.order_index)
            .execute(pool)
            .await;

            match applied {
                Ok(result) if result.rows_affected() > 0 => outcome.updated += 1,
                Ok(_) => {
                    tracing::warn!(id = entry.id, "Project reorder target not found");
                    outcome.failed.push(entry.id);
                }
                Err(err) => {
                    tracing::warn!(id = entry.id, error = %err, "Project reorder update failed");
                    outcome.failed.push(entry.id);
                }
            }
        }
        outcome
    }
}
