//! Timestamp wrapper and field-update directives
//!
//! Instants are never persisted as native date objects; they are stored as
//! the structured wrapper `{"isTimestamp": true, "iso": "<ISO-8601>"}` so the
//! on-disk shape stays stable across serialization layers.
//!
//! [`FieldValue`] builds the update directives (`arrayUnion`, `arrayRemove`,
//! `increment`). Directives are stored verbatim as sentinel objects; the
//! write path does not expand them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Error, Result};

/// Serialization-stable instant wrapper
///
/// The `iso` field is an ISO-8601 string with millisecond precision in UTC,
/// matching what the persisted documents carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(rename = "isTimestamp")]
    is_timestamp: bool,
    /// ISO-8601 instant
    pub iso: String,
}

impl Timestamp {
    /// Wrap the current instant
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wrap a given instant
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Timestamp {
            is_timestamp: true,
            iso: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parse the wrapped instant back out
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.iso)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::SerializationError(format!("invalid timestamp {:?}: {}", self.iso, e)))
    }

    /// Read a wrapper back out of stored document data
    ///
    /// Returns `None` if the value is not a timestamp wrapper.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value::<Timestamp>(value.clone())
            .ok()
            .filter(|ts| ts.is_timestamp)
    }

    /// The wrapper as document data
    pub fn to_value(&self) -> Value {
        json!({ "isTimestamp": true, "iso": self.iso })
    }
}

/// Field-update directive constructors
///
/// Each constructor returns the sentinel object callers embed in `set` and
/// `update` payloads. The store persists these sentinels as-is.
pub struct FieldValue;

impl FieldValue {
    /// Current instant as a plain ISO-8601 string
    pub fn server_timestamp() -> Value {
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Union directive over an array field
    pub fn array_union(items: Vec<Value>) -> Value {
        json!({ "_type": "arrayUnion", "items": items })
    }

    /// Removal directive over an array field
    pub fn array_remove(items: Vec<Value>) -> Value {
        json!({ "_type": "arrayRemove", "items": items })
    }

    /// Numeric increment directive
    pub fn increment(n: f64) -> Value {
        json!({ "_type": "increment", "n": n })
    }
}
