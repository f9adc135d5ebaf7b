//! Section entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

use crate::models::element::SectionElement;

/// A section row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub column_count: i32,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A section with its elements, sorted by (column_index, order_index).
#[derive(Debug, Serialize)]
pub struct SectionWithElements {
    #[serde(flatten)]
    pub section: Section,
    pub elements: Vec<SectionElement>,
}

/// DTO for creating a section. The order index is assigned server-side from
/// the project's current maximum.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub project_id: DbId,
    pub title: Option<String>,
    pub column_count: Option<i32>,
}

/// DTO for updating a section. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    pub title: Option<String>,
    pub column_count: Option<i32>,
    pub order_index: Option<i32>,
}
