//! Error types for EmberDB
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for EmberDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the document store
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a storage backend
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Update targeted a document id that is not in the collection
    #[error("Document {id} not found in collection {collection}")]
    DocumentNotFound {
        /// Collection the lookup ran against
        collection: String,
        /// Missing document id
        id: String,
    },

    /// Stored payload failed to parse as a document table
    ///
    /// Surfaced by `try_load`; the plain `load` path absorbs this variant
    /// and degrades to an empty collection.
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// Storage backend rejected a write (quota, disabled storage, ...)
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
