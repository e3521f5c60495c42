//! Persistent storage subsystem.
//!
//! # Data Flow
//! ```text
//! resource handler
//!     → ItemStore trait (create / list_all / find_by_id / delete_by_id)
//!     → mongo.rs  (MongoDB collection, production)
//!     → memory.rs (in-process Vec, development & tests)
//! ```
//!
//! # Design Decisions
//! - The store owns identity and creation time; callers only supply a name
//! - Handlers depend on `Arc<dyn ItemStore>` so a substitute store can be
//!   injected in tests without a running database
//! - Exactly two failure modes cross the boundary: `NotFound` and
//!   `Unavailable`; the handler decides how each maps onto the wire

pub mod item;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

pub use item::Item;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live record matches the requested id.
    #[error("no item matches the requested id")]
    NotFound,

    /// The underlying storage cannot be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Boundary between domain operations and persistent storage.
///
/// One handle is created at startup and shared across all requests.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a new item with the given name; the store assigns `id` and `date`.
    async fn create(&self, name: String) -> Result<Item, StoreError>;

    /// All live items, ordered by `date` descending (newest first).
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Look up a single item. `NotFound` covers a malformed id as well as
    /// an absent one.
    async fn find_by_id(&self, id: &str) -> Result<Item, StoreError>;

    /// Remove the item matching `id`. The record is resolved first; deleting
    /// an absent id is `NotFound`, not a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
