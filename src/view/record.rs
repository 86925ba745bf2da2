//! Record Trait
//!
//! Abstraction over row data so the view can work with any field-addressable
//! record type, with a JSON-object implementation for schemaless rows.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Trait for rows displayed by the data view
///
/// A record is an opaque mapping from field name to value. The view never
/// validates a schema; it only looks fields up by key, scans all values when
/// searching, and reads the designated `id` field for row identity.
pub trait Record: Clone {
    /// Look up a field by name
    fn field(&self, key: &str) -> Option<&Value>;

    /// All field values, in the record's own order
    fn values(&self) -> Vec<&Value>;

    /// Row identifier, conventionally the `id` field
    fn row_id(&self) -> Option<String> {
        self.field("id").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// A schemaless row backed by a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRow(pub Map<String, Value>);

impl JsonRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a row from any serializable value
    ///
    /// Fails if the value does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Error::Invalid {
                message: "row must serialize to a JSON object".to_string(),
            }),
        }
    }

    /// Insert a field
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Record for JsonRow {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn values(&self) -> Vec<&Value> {
        self.0.values().collect()
    }
}

impl From<Map<String, Value>> for JsonRow {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
