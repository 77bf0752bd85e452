//! Document domain model shared by the read-only collections.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// A stored document: a typed id plus an opaque JSON object body.
///
/// Serializes as the body object with `_id` merged in, `_id` first.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Map<String, Value>,
}

impl Document {
    /// Build a document from a stored row, rejecting bodies that are not
    /// JSON objects. A stray `_id` inside the body is dropped in favour of
    /// the row id.
    pub fn from_stored(id: String, stored: Value) -> Result<Self, DomainError> {
        match stored {
            Value::Object(mut body) => {
                body.remove("_id");
                Ok(Self { id, body })
            }
            other => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("document {id} is a JSON {} not an object", json_kind(&other)),
            )),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.body.len() + 1))?;
        map.serialize_entry("_id", &self.id)?;
        for (key, value) in &self.body {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
