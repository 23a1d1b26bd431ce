//! Read-only result objects
//!
//! Snapshots are point-in-time materializations: constructed once by a
//! terminal `get`, never written back, never mutated.

use serde_json::Value;

use crate::query::Entry;

/// Point-in-time view of a single document
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    id: String,
    data: Option<Value>,
}

impl DocumentSnapshot {
    pub(crate) fn new(id: String, data: Option<Value>) -> Self {
        DocumentSnapshot { id, data }
    }

    /// The document id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the document existed when the snapshot was taken
    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    /// The raw document data, `None` if the document does not exist
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Consume the snapshot, yielding the data
    pub fn into_data(self) -> Option<Value> {
        self.data
    }
}

/// Point-in-time view of a resolved query
///
/// Document order is the order the query resolved them in; an unfiltered,
/// unsorted read returns insertion order.
#[derive(Debug, Clone)]
pub struct QuerySnapshot {
    docs: Vec<DocumentSnapshot>,
}

impl QuerySnapshot {
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        QuerySnapshot {
            docs: entries
                .into_iter()
                .map(|e| DocumentSnapshot::new(e.id, Some(e.data)))
                .collect(),
        }
    }

    /// The resolved documents, in result order
    pub fn docs(&self) -> &[DocumentSnapshot] {
        &self.docs
    }

    /// Number of documents in the result
    pub fn size(&self) -> usize {
        self.docs.len()
    }

    /// Whether the result holds no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate the result without consuming it
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentSnapshot> {
        self.docs.iter()
    }
}

impl<'a> IntoIterator for &'a QuerySnapshot {
    type Item = &'a DocumentSnapshot;
    type IntoIter = std::slice::Iter<'a, DocumentSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl IntoIterator for QuerySnapshot {
    type Item = DocumentSnapshot;
    type IntoIter = std::vec::IntoIter<DocumentSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}
