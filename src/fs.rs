//! One-shot file operations.
//!
//! Every call resolves the format from the path before touching the
//! filesystem, then opens, transcodes and closes a single file.

use crate::config::CodecConfig;
use crate::document::{Document, kind_of};
use crate::formats::Format;
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::instrument;

const LOAD_COUNTER: &str = "docio_load_total";
const SAVE_COUNTER: &str = "docio_save_total";

/// Reads and parses the file at `path`, choosing the format by extension.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] if the extension is not json, yaml, yml or toml
/// - [`Error::IoFailure`] if the file cannot be read
/// - [`Error::ParseFailure`] if the content is invalid for the format
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    load_path(path.as_ref())
}

/// Reads the file at `path` and maps it onto `T`.
///
/// # Errors
///
/// Fails like [`load`], and with [`Error::ParseFailure`] if the document does
/// not match the shape of `T`.
pub fn load_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let document = load_path(path)?;

    serde_json::from_value(document.into_value()).map_err(|e| Error::ParseFailure {
        format,
        origin: origin(path),
        cause: e.to_string(),
    })
}

/// Serializes `document` to `path` with default options, choosing the format
/// by extension. Existing content is replaced.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] if the extension is not json, yaml, yml or toml
/// - [`Error::SerializeFailure`] if the document cannot be expressed in the format
/// - [`Error::IoFailure`] if the file cannot be written
pub fn save(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    save_path(document, path.as_ref(), &CodecConfig::default())
}

/// Serializes `document` to `path` using `config`.
///
/// # Errors
///
/// Fails like [`save`].
pub fn save_with(document: &Document, path: impl AsRef<Path>, config: &CodecConfig) -> Result<()> {
    save_path(document, path.as_ref(), config)
}

/// Serializes any value that forms a map or sequence to `path`.
///
/// # Errors
///
/// Fails like [`save`], and with [`Error::SerializeFailure`] if `value` does
/// not serialize to a map or sequence.
pub fn save_value<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let serialize_error = |cause: String| Error::SerializeFailure {
        format,
        origin: origin(path),
        cause,
    };

    let value = serde_json::to_value(value).map_err(|e| serialize_error(e.to_string()))?;
    let document = Document::try_from(value).map_err(|rejected| {
        serialize_error(format!(
            "expected a mapping or sequence, found {}",
            kind_of(&rejected)
        ))
    })?;

    save_path(&document, path, &CodecConfig::default())
}

#[instrument(skip_all, fields(path = %path.display()))]
fn load_path(path: &Path) -> Result<Document> {
    let result = Format::from_path(path).and_then(|format| {
        let bytes = fs::read(path).map_err(|source| Error::IoFailure {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        // The file was readable, so bad encoding is a content error.
        let text = String::from_utf8(bytes).map_err(|e| Error::ParseFailure {
            format,
            origin: origin(path),
            cause: e.to_string(),
        })?;
        let document = format.decode(&text, &origin(path))?;
        tracing::debug!(%format, bytes = text.len(), "loaded document");
        Ok(document)
    });

    observe(LOAD_COUNTER, path, &result);
    result
}

#[instrument(skip_all, fields(path = %path.display()))]
fn save_path(document: &Document, path: &Path, config: &CodecConfig) -> Result<()> {
    let result = Format::from_path(path).and_then(|format| {
        // Encode first so a failed serialization leaves the file untouched.
        let text = format.encode(document, config, &origin(path))?;
        fs::write(path, &text).map_err(|source| Error::IoFailure {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(%format, bytes = text.len(), "saved document");
        Ok(())
    });

    observe(SAVE_COUNTER, path, &result);
    result
}

fn origin(path: &Path) -> String {
    path.display().to_string()
}

fn observe<T>(counter: &'static str, path: &Path, result: &Result<T>) {
    let format = Format::from_path(path).map_or("unknown", |f| f.as_str());

    match result {
        Ok(_) => {
            metrics::counter!(counter, "format" => format, "status" => "success").increment(1);
        },
        Err(e) => {
            tracing::debug!(error = %e, kind = e.kind(), "file operation failed");
            metrics::counter!(
                counter,
                "format" => format,
                "status" => "error",
                "kind" => e.kind()
            )
            .increment(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Settings {
        name: String,
        retries: u32,
    }

    #[test]
    fn test_unsupported_extension_skips_filesystem() {
        // The file does not exist, so an IoFailure would mean it was opened.
        let err = load("missing/data.weird").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_as_typed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "name = \"svc\"\nretries = 3\n").unwrap();

        let settings: Settings = load_as(&path).unwrap();
        assert_eq!(
            settings,
            Settings {
                name: "svc".to_string(),
                retries: 3
            }
        );
    }

    #[test]
    fn test_load_as_shape_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"name": "svc"}"#).unwrap();

        let err = load_as::<Settings>(&path).unwrap_err();
        assert!(matches!(err, Error::ParseFailure { format: Format::Json, .. }));
    }

    #[test]
    fn test_save_value_struct() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yml");
        let settings = Settings {
            name: "svc".to_string(),
            retries: 5,
        };

        save_value(&settings, &path).unwrap();
        assert_eq!(load_as::<Settings>(&path).unwrap(), settings);
    }

    #[test]
    fn test_save_value_rejects_scalar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scalar.json");

        let err = save_value(&42, &path).unwrap_err();
        assert!(matches!(err, Error::SerializeFailure { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_encode_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keep.toml");
        fs::write(&path, "a = 1\n").unwrap();

        let doc = Document::try_from(json!({"a": null})).unwrap();
        assert!(save(&doc, &path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "a = 1\n");
    }
}
