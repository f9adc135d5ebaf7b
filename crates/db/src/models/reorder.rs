//! Reorder request and outcome types.
//!
//! A reorder request carries the caller's full sibling set with new
//! positions. Entries are applied one UPDATE at a time in list order and a
//! failing entry does not abort the rest, so a mid-batch failure leaves the
//! earlier entries applied. The outcome reports which ids did not apply.

use serde::{Deserialize, Serialize};

use atelier_core::types::DbId;

/// A new position for a project or section.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEntry {
    pub id: DbId,
    pub order_index: i32,
}

/// A new position (and optionally column) for an element.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementOrderEntry {
    pub id: DbId,
    pub order_index: i32,
    pub column_index: Option<i32>,
}

/// Result of applying a reorder batch.
///
/// `failed` holds the ids whose UPDATE errored or matched no row; every
/// other entry was persisted regardless of position in the list.
#[derive(Debug, Default, Serialize)]
pub struct ReorderOutcome {
    pub updated: usize,
    pub failed: Vec<DbId>,
}
