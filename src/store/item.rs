//! The Item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One shopping-list entry, the only persisted entity.
///
/// Immutable after creation except for deletion; there is no update
/// operation. `date` exists only to drive the newest-first listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier assigned by the store on creation.
    pub id: String,

    /// Display name. Not validated; an empty name is stored as-is.
    pub name: String,

    /// Creation timestamp assigned by the store at insertion.
    pub date: DateTime<Utc>,
}
