//! Database handle and builder
//!
//! `Database` is the explicit context every handle hangs off. There is no
//! module-level singleton: tests construct as many independent in-memory
//! databases as they need, and production code decides once which backend
//! and key prefix to use.

use std::path::PathBuf;
use std::sync::Arc;

use crate::collection::CollectionRef;
use ember_core::Result;
use ember_storage::{CollectionStore, FileBackend, MemoryBackend, StorageBackend};

/// An open document store
#[derive(Clone)]
pub struct Database {
    store: Arc<CollectionStore>,
}

impl Database {
    /// Open an isolated in-memory database with the default key prefix
    pub fn in_memory() -> Self {
        Database {
            store: Arc::new(CollectionStore::new(
                Arc::new(MemoryBackend::new()),
                CollectionStore::DEFAULT_PREFIX,
            )),
        }
    }

    /// Start configuring a database
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    /// Handle on a named collection
    ///
    /// Collections exist implicitly; taking a handle performs no I/O.
    pub fn collection(&self, name: impl Into<String>) -> CollectionRef {
        CollectionRef::new(self.store.clone(), name.into())
    }
}

/// Configures and opens a [`Database`]
#[derive(Default)]
pub struct DatabaseBuilder {
    backend: Option<Arc<dyn StorageBackend>>,
    on_disk: Option<PathBuf>,
    prefix: Option<String>,
}

impl DatabaseBuilder {
    /// Use a fresh in-memory backend (the default)
    pub fn in_memory(mut self) -> Self {
        self.backend = None;
        self.on_disk = None;
        self
    }

    /// Persist under `root` on the filesystem
    pub fn on_disk(mut self, root: impl Into<PathBuf>) -> Self {
        self.on_disk = Some(root.into());
        self
    }

    /// Use a caller-supplied backend
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Namespace all storage keys with `prefix`
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Open the database
    ///
    /// # Errors
    ///
    /// Fails only when an on-disk root cannot be created.
    pub fn open(self) -> Result<Database> {
        let backend: Arc<dyn StorageBackend> = match (self.backend, self.on_disk) {
            (Some(backend), _) => backend,
            (None, Some(root)) => Arc::new(FileBackend::open(root)?),
            (None, None) => Arc::new(MemoryBackend::new()),
        };
        let prefix = self
            .prefix
            .unwrap_or_else(|| CollectionStore::DEFAULT_PREFIX.to_string());
        Ok(Database {
            store: Arc::new(CollectionStore::new(backend, prefix)),
        })
    }
}
