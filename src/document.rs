//! In-memory representation of a parsed data file.

use serde::Serialize;
use serde_json::{Map, Value};

/// A structured value read from or destined for a data file.
///
/// JSON and TOML files always decode to [`Document::Mapping`]. YAML files may
/// also decode to [`Document::Sequence`].
///
/// Serializes transparently as its inner mapping or sequence, so the same
/// value can be handed to any serde emitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// A top-level mapping of string keys to values.
    Mapping(Map<String, Value>),
    /// A top-level sequence of values.
    Sequence(Vec<Value>),
}

impl Document {
    /// Creates an empty mapping document.
    #[must_use]
    pub fn new() -> Self {
        Self::Mapping(Map::new())
    }

    /// Returns true if the document is a top-level mapping.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns the top-level mapping, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the top-level sequence, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Mapping(_) => None,
            Self::Sequence(items) => Some(items.as_slice()),
        }
    }

    /// Looks up a top-level key. Always `None` for sequences.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Number of top-level entries or items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Mapping(map) => map.len(),
            Self::Sequence(items) => items.len(),
        }
    }

    /// Returns true if there are no top-level entries or items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts into a plain [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Mapping(map) => Value::Object(map),
            Self::Sequence(items) => Value::Array(items),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<Vec<Value>> for Document {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

/// Fails with the rejected value when it is neither an object nor an array.
impl TryFrom<Value> for Document {
    type Error = Value;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::Mapping(map)),
            Value::Array(items) => Ok(Self::Sequence(items)),
            other => Err(other),
        }
    }
}

/// Describes the JSON type of a value for error messages.
pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
