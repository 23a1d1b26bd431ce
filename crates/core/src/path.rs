//! Dotted field paths
//!
//! A [`FieldPath`] addresses a value inside a document by successive key
//! lookups: `user.profile.name` resolves `data["user"]["profile"]["name"]`.
//! Resolution short-circuits to `None` on any missing intermediate instead of
//! erroring, so query predicates can treat "absent" uniformly.

use serde_json::Value;
use std::fmt;

/// Parsed dotted path into a document
///
/// Segments are plain object keys. A segment that parses as an index also
/// resolves into arrays, so `tags.0` reads the first element of a `tags`
/// array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path
    ///
    /// Splitting never fails; an empty string yields a single empty segment,
    /// which only resolves if the document actually contains an `""` key.
    pub fn parse(raw: &str) -> Self {
        FieldPath {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// Path segments in resolution order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against a document root
    ///
    /// Returns `None` as soon as a segment is missing or the current value
    /// is not a container.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        FieldPath::parse(raw)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
