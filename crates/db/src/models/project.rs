//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

use crate::models::section::SectionWithElements;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub year: i32,
    pub category: String,
    pub slug: String,
    pub main_image_url: Option<String>,
    pub main_image_key: Option<String>,
    pub coming_soon: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its sections and their elements, sorted by
/// order_index. The payload of the detail endpoints.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub sections: Vec<SectionWithElements>,
}

/// Fields accepted when creating a project. The slug and order index are
/// derived server-side, and the main image arrives as a separate multipart
/// file part.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub subtitle: Option<String>,
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub coming_soon: bool,
}

/// DTO for updating an existing project. All fields are optional; the slug
/// is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub coming_soon: Option<bool>,
    pub main_image_url: Option<String>,
    pub main_image_key: Option<String>,
}
