//! Persistence behavior across database instances and processes
//!
//! A "fresh process" is simulated by dropping every handle and reopening the
//! database over the same on-disk root (or the same shared backend).

use std::collections::BTreeMap;
use std::sync::Arc;

use emberdb::{Database, Error, MemoryBackend, StorageBackend};
use serde_json::{json, Value};

fn document_set(db: &Database, collection: &str) -> BTreeMap<String, Value> {
    db.collection(collection)
        .get()
        .unwrap()
        .into_iter()
        .map(|d| (d.id().to_string(), d.into_data().unwrap()))
        .collect()
}

#[test]
fn test_on_disk_round_trip_preserves_document_set() {
    let dir = tempfile::tempdir().unwrap();
    let expected;
    {
        let db = Database::builder().on_disk(dir.path()).open().unwrap();
        let items = db.collection("items");
        items.add(json!({"name": "a", "n": 1})).unwrap();
        items.add(json!({"name": "b", "n": 2})).unwrap();
        items.doc("fixed").set(json!({"name": "c"})).unwrap();
        expected = document_set(&db, "items");
    }

    let reopened = Database::builder().on_disk(dir.path()).open().unwrap();
    assert_eq!(document_set(&reopened, "items"), expected);
}

#[test]
fn test_shared_backend_round_trip() {
    let backend = Arc::new(MemoryBackend::new());
    let expected;
    {
        let db = Database::builder().backend(backend.clone()).open().unwrap();
        db.collection("items").add(json!({"n": 1})).unwrap();
        expected = document_set(&db, "items");
    }

    let reopened = Database::builder().backend(backend).open().unwrap();
    assert_eq!(document_set(&reopened, "items"), expected);
}

#[test]
fn test_every_mutation_persists_immediately() {
    let backend = Arc::new(MemoryBackend::new());
    let db = Database::builder().backend(backend.clone()).open().unwrap();
    let observer = Database::builder().backend(backend).open().unwrap();
    let items = db.collection("items");

    let id = items.add(json!({"n": 1})).unwrap();
    assert_eq!(observer.collection("items").get().unwrap().size(), 1);

    items.doc(&id).update(json!({"n": 2})).unwrap();
    assert_eq!(
        observer.collection("items").doc(&id).get().unwrap().data(),
        Some(&json!({"n": 2}))
    );

    items.doc(&id).delete().unwrap();
    assert!(observer.collection("items").get().unwrap().is_empty());
}

#[test]
fn test_corrupt_payload_degrades_to_empty_collection() {
    let backend = Arc::new(MemoryBackend::new());
    backend.write("emberdb/items", "{definitely not json").unwrap();

    let db = Database::builder().backend(backend).open().unwrap();
    let snap = db.collection("items").get().unwrap();
    assert!(snap.is_empty());
}

#[test]
fn test_writes_recover_a_corrupt_collection() {
    let backend = Arc::new(MemoryBackend::new());
    backend.write("emberdb/items", "[not an object]").unwrap();

    let db = Database::builder().backend(backend.clone()).open().unwrap();
    db.collection("items").add(json!({"n": 1})).unwrap();

    // the rewrite replaced the corrupt payload with a valid table
    let raw = backend.read("emberdb/items").unwrap().unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed.is_object());
    assert_eq!(db.collection("items").get().unwrap().size(), 1);
}

// ============================================================================
// Write-failure propagation
// ============================================================================

/// Backend that accepts reads but refuses all writes.
struct ReadOnlyBackend {
    inner: MemoryBackend,
}

impl StorageBackend for ReadOnlyBackend {
    fn read(&self, key: &str) -> emberdb::Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, _key: &str, _payload: &str) -> emberdb::Result<()> {
        Err(Error::StorageError("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> emberdb::Result<()> {
        Err(Error::StorageError("quota exceeded".to_string()))
    }
}

#[test]
fn test_write_failure_propagates_to_caller() {
    let db = Database::builder()
        .backend(Arc::new(ReadOnlyBackend {
            inner: MemoryBackend::new(),
        }))
        .open()
        .unwrap();
    let items = db.collection("items");

    assert!(matches!(
        items.add(json!({"n": 1})).unwrap_err(),
        Error::StorageError(_)
    ));
    assert!(matches!(
        items.doc("d").set(json!({})).unwrap_err(),
        Error::StorageError(_)
    ));
    assert!(matches!(
        items.doc("d").delete().unwrap_err(),
        Error::StorageError(_)
    ));

    // reads still work
    assert!(items.get().unwrap().is_empty());
}
