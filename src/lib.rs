//! EmberDB - embedded Firestore-style document store
//!
//! EmberDB keeps named collections of schemaless JSON documents over a flat
//! string-keyed backend, with a chainable query API and eager per-write
//! persistence.
//!
//! # Quick Start
//!
//! ```
//! use emberdb::Database;
//! use serde_json::json;
//!
//! # fn main() -> emberdb::Result<()> {
//! // Create an in-memory database
//! let db = Database::in_memory();
//! let users = db.collection("users");
//!
//! // Store a document
//! let id = users.add(json!({"email": "alice@example.com", "score": 42}))?;
//!
//! // Query it back
//! let snap = users.where_field("email", "==", json!("alice@example.com")).get()?;
//! assert_eq!(snap.size(), 1);
//! assert_eq!(snap.docs()[0].id(), id);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! All operations go through [`Database`], the dependency-injected context
//! holding the storage backend. Collection and document handles borrow it;
//! query chains are immutable and eagerly evaluated; every mutation
//! re-persists its collection synchronously.

// Re-export the public API from ember-api
pub use ember_api::*;
