//! Section element entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// An element row from the `section_elements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionElement {
    pub id: DbId,
    pub section_id: DbId,
    pub element_type: String,
    pub column_index: i32,
    pub order_index: i32,
    pub content: String,
    pub media_url: Option<String>,
    pub alt_text: String,
    pub caption: String,
    pub embed_url: Option<String>,
    pub embed_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an element. The order index is assigned server-side from
/// the (section, column) scope's current maximum; `embed_url` is normalized
/// before insertion when the type is `embed`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateElement {
    pub element_type: String,
    #[serde(default)]
    pub column_index: i32,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub embed_url: Option<String>,
}

/// DTO for updating an element. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateElement {
    pub element_type: Option<String>,
    pub column_index: Option<i32>,
    pub order_index: Option<i32>,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub embed_url: Option<String>,
}
