//! Collection handles
//!
//! A `CollectionRef` is the entry point for everything scoped to one named
//! collection. Starting a query chain here reads the backing store exactly
//! once; every subsequent chain call works on the materialized list.

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::document::DocumentRef;
use crate::query::{Direction, Entry, Query};
use crate::snapshot::QuerySnapshot;
use ember_core::{generate_id, Result};
use ember_storage::CollectionStore;

/// Handle on a named collection
#[derive(Clone)]
pub struct CollectionRef {
    store: Arc<CollectionStore>,
    name: String,
}

impl CollectionRef {
    pub(crate) fn new(store: Arc<CollectionStore>, name: String) -> Self {
        CollectionRef { store, name }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle on the document at `id`
    ///
    /// The document need not exist; `get` reports existence.
    pub fn doc(&self, id: impl Into<String>) -> DocumentRef {
        DocumentRef::new(self.store.clone(), self.name.clone(), id.into())
    }

    /// Handle on a document with a freshly generated id
    pub fn new_doc(&self) -> DocumentRef {
        self.doc(generate_id())
    }

    /// Store `data` under a generated id, returning the id
    pub fn add(&self, data: Value) -> Result<String> {
        let id = generate_id();
        let mut table = self.store.load(&self.name);
        table.insert(id.clone(), data);
        self.store.save(&self.name, &table)?;
        debug!(target: "ember::api", collection = %self.name, id = %id, "Document added");
        Ok(id)
    }

    fn materialize(&self) -> Vec<Entry> {
        self.store
            .load(&self.name)
            .into_iter()
            .map(|(id, data)| Entry { id, data })
            .collect()
    }

    /// Start a query chain with a filter
    pub fn where_field(&self, field: &str, op: &str, value: Value) -> Query {
        Query::new(self.name.clone(), self.materialize()).where_field(field, op, value)
    }

    /// Start a query chain with a sort
    pub fn order_by(&self, field: &str, direction: Direction) -> Query {
        Query::new(self.name.clone(), self.materialize()).order_by(field, direction)
    }

    /// Start a query chain with a row limit
    pub fn limit(&self, n: usize) -> Query {
        Query::new(self.name.clone(), self.materialize()).limit(n)
    }

    /// Snapshot every document, in insertion order
    pub fn get(&self) -> Result<QuerySnapshot> {
        Query::new(self.name.clone(), self.materialize()).get()
    }
}
