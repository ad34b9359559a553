//! The character document: an arbitrarily nested JSON tree with an object root.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;
use crate::path::FieldPath;

/// A character record's JSON state tree.
///
/// The root is always an object; beyond `name` and the `system` subtree the
/// shape is tool-defined and not fixed, so unknown keys must be handled
/// gracefully. Leaves are strings, numbers, booleans, null, or arrays.
/// Arrays are atomic values and are never descended into.
///
/// Key order is insertion order (`serde_json` with `preserve_order`), which
/// is what makes diff traversal order deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Wrap a JSON value, rejecting anything without an object root.
    pub fn from_value(value: Value) -> Result<Self, TypeError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(TypeError::InvalidDocumentShape(format!(
                "document root must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build a document from an existing key-value map.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// An empty document.
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    /// The underlying key-value map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Consume the document into a plain JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// The document's display name, when present.
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Read the value at `path`.
    ///
    /// Returns `None` when any step of the path is missing or lands on a
    /// non-object before the final segment.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Write `value` at `path`, creating intermediate objects as needed.
    ///
    /// A non-object intermediate on the path is replaced with an empty object
    /// before descending, so the write always lands. Destructive, but
    /// deterministic.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        let segments: Vec<&str> = path.segments().collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in parents {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = slot
                .as_object_mut()
                .expect("slot was coerced to an object");
        }
        current.insert(last.to_string(), value);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
