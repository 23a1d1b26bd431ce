//! Public API for EmberDB
//!
//! Callers open a [`Database`], take a [`CollectionRef`], and either address
//! a single document ([`DocumentRef`]) or chain query operations
//! ([`Query`]) down to an immutable snapshot:
//!
//! ```
//! use ember_api::{Database, Direction};
//! use serde_json::json;
//!
//! # fn main() -> ember_api::Result<()> {
//! let db = Database::in_memory();
//! let items = db.collection("items");
//!
//! let id = items.add(json!({"name": "a", "score": 10}))?;
//! let snap = items
//!     .where_field("score", ">=", json!(5))
//!     .order_by("name", Direction::Asc)
//!     .limit(10)
//!     .get()?;
//!
//! assert_eq!(snap.size(), 1);
//! assert_eq!(snap.docs()[0].id(), id);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

mod collection;
mod database;
mod document;
mod query;
mod snapshot;

pub use collection::CollectionRef;
pub use database::{Database, DatabaseBuilder};
pub use document::DocumentRef;
pub use query::{Direction, Operator, Query};
pub use snapshot::{DocumentSnapshot, QuerySnapshot};

// Re-export the layers below so depending on `ember-api` (or the root
// facade) is enough for ordinary use.
pub use ember_core::{generate_id, Error, FieldPath, FieldValue, Result, Timestamp};
pub use ember_storage::{
    CollectionStore, DocumentTable, FileBackend, MemoryBackend, StorageBackend,
};
