//! Content model validation: element types, project categories, and section
//! column counts.

use crate::error::CoreError;

/// Minimum and maximum columns a section may have.
pub const MIN_COLUMNS: i32 = 1;
pub const MAX_COLUMNS: i32 = 4;

/// Valid element type names, in display order.
const VALID_ELEMENT_TYPES: &[&str] = &["text", "image", "video", "quote", "embed"];

/// The kind of content an element holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Text,
    Image,
    Video,
    Quote,
    Embed,
}

impl ElementType {
    /// Parse from the database `element_type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "quote" => Ok(Self::Quote),
            "embed" => Ok(Self::Embed),
            other => Err(CoreError::Validation(format!(
                "Invalid element type '{other}'. Must be one of: {}",
                VALID_ELEMENT_TYPES.join(", ")
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Quote => "quote",
            Self::Embed => "embed",
        }
    }
}

/// Project category. Each category keeps its own independent order sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Works,
    ParallelDiscourses,
}

impl ProjectCategory {
    /// Parse from the database `category` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "works" => Ok(Self::Works),
            "parallel discourses" => Ok(Self::ParallelDiscourses),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be 'works' or 'parallel discourses'"
            ))),
        }
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Works => "works",
            Self::ParallelDiscourses => "parallel discourses",
        }
    }
}

/// Validate that a section column count is within 1..=4.
pub fn validate_column_count(column_count: i32) -> Result<(), CoreError> {
    if (MIN_COLUMNS..=MAX_COLUMNS).contains(&column_count) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid column count {column_count}. Must be between {MIN_COLUMNS} and {MAX_COLUMNS}"
        )))
    }
}

/// Validate that an element's 0-based column index fits the section's column
/// count.
pub fn validate_column_index(column_index: i32, column_count: i32) -> Result<(), CoreError> {
    if column_index >= 0 && column_index < column_count {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Column index {column_index} out of range for a {column_count}-column section"
        )))
    }
}
