//! # docio
//!
//! Read and write structured data files, picking the format from the file
//! extension.
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | JSON |
//! | `.yaml`, `.yml` | YAML |
//! | `.toml` | TOML |
//!
//! Every call is a one-shot open, transcode, close. Parsed content is held as
//! a [`Document`]: a mapping of string keys to dynamic [`Value`]s, or for
//! YAML possibly a top-level sequence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docio::Value;
//!
//! let doc = docio::load("config.json")?;
//! assert_eq!(doc.get("a"), Some(&Value::from(1)));
//!
//! docio::save(&doc, "config.yaml")?;
//! # Ok::<(), docio::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

pub mod config;
pub mod document;
pub mod formats;
mod fs;

pub use config::CodecConfig;
pub use document::Document;
pub use formats::{Codec, Format};
pub use fs::{load, load_as, save, save_value, save_with};
pub use serde_json::{Map, Value};

/// Error type for docio operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `UnsupportedFormat` | The path extension is not one of json, yaml, yml, toml |
/// | `IoFailure` | The file is missing, unreadable or cannot be written |
/// | `ParseFailure` | Content is not UTF-8, is malformed, or has the wrong top-level shape |
/// | `SerializeFailure` | The document cannot be expressed in the target format |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The file extension does not map to a known format.
    ///
    /// `extension` is reported as written, including its leading dot, and is
    /// empty when the path has no extension.
    #[error("unsupported file extension '{extension}' (file: {})", .path.display())]
    UnsupportedFormat {
        /// The offending extension.
        extension: String,
        /// The path that was routed.
        path: PathBuf,
    },

    /// Opening, reading or writing the file failed.
    #[error("failed to {operation} {}: {source}", .path.display())]
    IoFailure {
        /// The attempted operation ("read" or "write").
        operation: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Content is not valid for the matched format.
    ///
    /// Raised when:
    /// - The text is syntactically malformed
    /// - The top-level value is neither a mapping nor (YAML only) a sequence
    /// - A TOML float is NaN or infinite
    /// - [`load_as`] cannot map the document onto the requested type
    #[error("failed to parse {format} from {origin}: {cause}")]
    ParseFailure {
        /// The format that was being decoded.
        format: Format,
        /// Where the text came from, usually a file path.
        origin: String,
        /// The underlying cause.
        cause: String,
    },

    /// The document cannot be represented in the target format.
    ///
    /// Raised when:
    /// - A TOML save receives a top-level sequence
    /// - A TOML save meets a null value
    /// - [`save_value`] receives a value that is not a map or sequence
    #[error("failed to serialize {format} for {origin}: {cause}")]
    SerializeFailure {
        /// The format that was being encoded.
        format: Format,
        /// The destination, usually a file path.
        origin: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Returns the metric label for this error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::IoFailure { .. } => "io_failure",
            Self::ParseFailure { .. } => "parse_failure",
            Self::SerializeFailure { .. } => "serialize_failure",
        }
    }
}

/// Result type alias for docio operations.
pub type Result<T> = std::result::Result<T, Error>;
