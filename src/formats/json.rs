//! JSON codec.
//!
//! Output is pretty-printed with a configurable indent (4 spaces by default)
//! and terminated by a newline.

use super::Format;
use crate::config::CodecConfig;
use crate::document::{Document, kind_of};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Parses JSON text. The top-level value must be an object.
///
/// # Errors
///
/// Returns [`Error::ParseFailure`] on malformed JSON or a non-object root.
pub fn decode(text: &str, origin: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::ParseFailure {
        format: Format::Json,
        origin: origin.to_string(),
        cause: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(Document::Mapping(map)),
        other => Err(Error::ParseFailure {
            format: Format::Json,
            origin: origin.to_string(),
            cause: format!("expected a mapping at top level, found {}", kind_of(&other)),
        }),
    }
}

/// Renders a document as indented JSON.
///
/// # Errors
///
/// Returns [`Error::SerializeFailure`] if serialization fails.
pub fn encode(document: &Document, config: &CodecConfig, origin: &str) -> Result<String> {
    let indent = " ".repeat(config.json_indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    let serialize_error = |cause: String| Error::SerializeFailure {
        format: Format::Json,
        origin: origin.to_string(),
        cause,
    };

    document
        .serialize(&mut serializer)
        .map_err(|e| serialize_error(e.to_string()))?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| serialize_error(e.to_string()))
}
