//! YAML codec.
//!
//! Reads a single plain-data document. A blank or null document reads as an
//! empty mapping. Merge keys (`<<`) are applied before conversion.

use super::Format;
use crate::config::CodecConfig;
use crate::document::{Document, kind_of};
use crate::{Error, Result};
use serde_json::{Map, Number, Value};

/// Parses YAML text into a mapping or sequence.
///
/// # Errors
///
/// Returns [`Error::ParseFailure`] on malformed YAML, multi-document
/// streams, non-string mapping keys, custom tags, non-finite floats, or a
/// scalar root.
pub fn decode(text: &str, origin: &str) -> Result<Document> {
    if text.trim().is_empty() {
        return Ok(Document::new());
    }

    let parse_error = |cause: String| Error::ParseFailure {
        format: Format::Yaml,
        origin: origin.to_string(),
        cause,
    };

    let mut raw: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(text).map_err(|e| parse_error(e.to_string()))?;
    raw.apply_merge().map_err(|e| parse_error(e.to_string()))?;

    match to_value(raw).map_err(parse_error)? {
        Value::Null => Ok(Document::new()),
        other => Document::try_from(other).map_err(|rejected| {
            parse_error(format!(
                "expected a mapping or sequence at top level, found {}",
                kind_of(&rejected)
            ))
        }),
    }
}

fn to_value(value: serde_yaml_ng::Value) -> std::result::Result<Value, String> {
    use serde_yaml_ng::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => to_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(to_value)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let Yaml::String(key) = key else {
                    return Err(format!(
                        "mapping keys must be strings, found {}",
                        kind_of(&to_value(key)?)
                    ));
                };
                map.insert(key, to_value(value)?);
            }
            Value::Object(map)
        },
        Yaml::Tagged(tagged) => {
            return Err(format!("custom tag {} is not supported", tagged.tag));
        },
    })
}

fn to_number(n: &serde_yaml_ng::Number) -> std::result::Result<Value, String> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("float {n} has no finite representation"))
}

/// Renders a document in the YAML library's default style.
///
/// # Errors
///
/// Returns [`Error::SerializeFailure`] if serialization fails.
pub fn encode(document: &Document, _config: &CodecConfig, origin: &str) -> Result<String> {
    serde_yaml_ng::to_string(document).map_err(|e| Error::SerializeFailure {
        format: Format::Yaml,
        origin: origin.to_string(),
        cause: e.to_string(),
    })
}
