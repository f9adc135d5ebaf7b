//! About page singleton model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// The single `about` row (id = 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub content: String,
    pub updated_at: Timestamp,
}

/// Replacement content for the about page.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAbout {
    pub content: String,
}
