//! Collection load/save layer
//!
//! A collection round-trips as one JSON object payload: document id to
//! document data, the id living in the map key only. Loads that fail to
//! parse degrade to an empty table; writes that fail propagate, because the
//! caller's view has already diverged from what was persisted.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::StorageBackend;
use ember_core::{Error, Result};

/// In-memory representation of one collection: document id → document data
///
/// Insertion-ordered, so an unfiltered read returns documents in the order
/// they were added.
pub type DocumentTable = serde_json::Map<String, serde_json::Value>;

/// Moves document tables across a [`StorageBackend`]
///
/// Every collection is stored under `{prefix}{collection}` in the backend's
/// flat key space.
#[derive(Clone)]
pub struct CollectionStore {
    backend: Arc<dyn StorageBackend>,
    prefix: String,
}

impl CollectionStore {
    /// Key prefix used when none is configured
    pub const DEFAULT_PREFIX: &'static str = "emberdb/";

    /// Create a store over `backend` with the given key prefix
    pub fn new(backend: Arc<dyn StorageBackend>, prefix: impl Into<String>) -> Self {
        CollectionStore {
            backend,
            prefix: prefix.into(),
        }
    }

    /// The backing storage key for a collection
    pub fn storage_key(&self, collection: &str) -> String {
        format!("{}{}", self.prefix, collection)
    }

    /// Load a collection, surfacing read and parse failures
    ///
    /// An absent key is not a failure: a collection that was never written
    /// decodes to an empty table.
    pub fn try_load(&self, collection: &str) -> Result<DocumentTable> {
        let raw = match self.backend.read(&self.storage_key(collection))? {
            Some(raw) => raw,
            None => return Ok(DocumentTable::new()),
        };
        serde_json::from_str(&raw).map_err(|e| {
            Error::Corruption(format!("collection {collection:?} payload: {e}"))
        })
    }

    /// Load a collection, absorbing failures into an empty table
    ///
    /// The read path never errors: corrupt or unreadable payloads degrade to
    /// an empty collection, with a warning for diagnosability.
    pub fn load(&self, collection: &str) -> DocumentTable {
        match self.try_load(collection) {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    target: "ember::storage",
                    collection,
                    error = %e,
                    "Discarding unreadable collection payload"
                );
                DocumentTable::new()
            }
        }
    }

    /// Drop a collection's stored payload entirely
    ///
    /// After a clear, the collection decodes to an empty table again,
    /// indistinguishable from one that was never written.
    ///
    /// # Errors
    ///
    /// Propagates backend removal failures.
    pub fn clear(&self, collection: &str) -> Result<()> {
        self.backend.remove(&self.storage_key(collection))?;
        debug!(target: "ember::storage", collection, "Collection cleared");
        Ok(())
    }

    /// Serialize and write a collection synchronously
    ///
    /// # Errors
    ///
    /// Propagates backend write failures to the mutating caller.
    pub fn save(&self, collection: &str, table: &DocumentTable) -> Result<()> {
        let payload = serde_json::to_string(table)?;
        self.backend.write(&self.storage_key(collection), &payload)?;
        debug!(
            target: "ember::storage",
            collection,
            documents = table.len(),
            "Collection saved"
        );
        Ok(())
    }
}
