//! Core types for EmberDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type hierarchy
//! - FieldPath: Dotted path into a document (e.g. `user.profile.name`)
//! - Value comparison: structural equality and same-type ordering
//! - Timestamp: serialization-stable instant wrapper
//! - FieldValue: field-update directive constructors
//! - Document id generation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod fields;
pub mod id;
pub mod path;

// Re-export commonly used types
pub use compare::{value_cmp, values_equal};
pub use error::{Error, Result};
pub use fields::{FieldValue, Timestamp};
pub use id::generate_id;
pub use path::FieldPath;
