//! TOML codec.
//!
//! TOML has no null, so documents holding null cannot be written. Datetimes
//! are read as their RFC 3339 strings.

use super::Format;
use crate::config::CodecConfig;
use crate::document::Document;
use crate::{Error, Result};
use serde_json::{Map, Number, Value};

/// Parses TOML text into a mapping.
///
/// # Errors
///
/// Returns [`Error::ParseFailure`] on malformed TOML or a non-finite float.
pub fn decode(text: &str, origin: &str) -> Result<Document> {
    let parse_error = |cause: String| Error::ParseFailure {
        format: Format::Toml,
        origin: origin.to_string(),
        cause,
    };

    let table: toml::Table = toml::from_str(text).map_err(|e| parse_error(e.to_string()))?;
    table_to_map(table).map(Document::Mapping).map_err(parse_error)
}

/// Renders a mapping document as TOML.
///
/// # Errors
///
/// Returns [`Error::SerializeFailure`] for sequence documents or values TOML
/// cannot hold, such as null.
pub fn encode(document: &Document, config: &CodecConfig, origin: &str) -> Result<String> {
    let serialize_error = |cause: String| Error::SerializeFailure {
        format: Format::Toml,
        origin: origin.to_string(),
        cause,
    };

    let Document::Mapping(map) = document else {
        return Err(serialize_error(
            "top level must be a mapping, found sequence".to_string(),
        ));
    };

    let rendered = if config.toml_pretty {
        toml::to_string_pretty(map)
    } else {
        toml::to_string(map)
    };
    rendered.map_err(|e| serialize_error(e.to_string()))
}

fn table_to_map(table: toml::Table) -> std::result::Result<Map<String, Value>, String> {
    table
        .into_iter()
        .map(|(key, value)| to_value(value).map(|v| (key, v)))
        .collect()
}

fn to_value(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("float {f} has no finite representation"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(to_value)
                .collect::<std::result::Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(table_to_map(table)?),
    })
}
