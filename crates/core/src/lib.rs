//! Domain logic shared by the atelier backend crates.
//!
//! Pure, database-free building blocks: the error taxonomy, shared ID and
//! timestamp aliases, slug derivation, embed-URL normalization, and content
//! validation (element types, project categories, column counts).

pub mod content;
pub mod embed;
pub mod error;
pub mod slug;
pub mod types;
