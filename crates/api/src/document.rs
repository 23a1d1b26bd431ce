//! Single-document handles

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::snapshot::DocumentSnapshot;
use ember_core::{Error, Result};
use ember_storage::CollectionStore;

/// Handle on one document id inside a collection
#[derive(Clone)]
pub struct DocumentRef {
    store: Arc<CollectionStore>,
    collection: String,
    id: String,
}

impl DocumentRef {
    pub(crate) fn new(store: Arc<CollectionStore>, collection: String, id: String) -> Self {
        DocumentRef {
            store,
            collection,
            id,
        }
    }

    /// The document id this handle addresses
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot the document; existence reflects table presence
    pub fn get(&self) -> Result<DocumentSnapshot> {
        let table = self.store.load(&self.collection);
        Ok(DocumentSnapshot::new(
            self.id.clone(),
            table.get(&self.id).cloned(),
        ))
    }

    /// Replace the document wholesale with `data`
    pub fn set(&self, data: Value) -> Result<()> {
        let mut table = self.store.load(&self.collection);
        table.insert(self.id.clone(), data);
        self.store.save(&self.collection, &table)?;
        debug!(target: "ember::api", collection = %self.collection, id = %self.id, "Document set");
        Ok(())
    }

    /// Shallow-merge `partial` onto the existing document
    ///
    /// Merging happens at the top level only; a nested object in `partial`
    /// replaces the stored one. Fails if the document does not exist, and a
    /// failed update leaves the collection untouched.
    pub fn update(&self, partial: Value) -> Result<()> {
        let mut table = self.store.load(&self.collection);
        let existing = table.get_mut(&self.id).ok_or_else(|| Error::DocumentNotFound {
            collection: self.collection.clone(),
            id: self.id.clone(),
        })?;

        match partial {
            Value::Object(fields) => match existing {
                Value::Object(map) => {
                    for (key, value) in fields {
                        map.insert(key, value);
                    }
                }
                other => *other = Value::Object(fields),
            },
            // a non-object partial contributes no fields
            _ => {}
        }

        self.store.save(&self.collection, &table)?;
        debug!(target: "ember::api", collection = %self.collection, id = %self.id, "Document updated");
        Ok(())
    }

    /// Remove the document; removing an absent id is not an error
    pub fn delete(&self) -> Result<()> {
        let mut table = self.store.load(&self.collection);
        table.remove(&self.id);
        self.store.save(&self.collection, &table)?;
        debug!(target: "ember::api", collection = %self.collection, id = %self.id, "Document deleted");
        Ok(())
    }
}
