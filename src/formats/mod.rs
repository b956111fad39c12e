//! Format codecs and extension routing.
//!
//! Each format module exposes a `decode`/`encode` pair. [`Format::from_path`]
//! looks the path extension up in a static table, and [`Format::codec`] hands
//! back the matching pair.
//!
//! | Format | Extensions | Top-level shapes |
//! |--------|------------|------------------|
//! | JSON | `json` | mapping |
//! | YAML | `yaml`, `yml` | mapping, sequence |
//! | TOML | `toml` | mapping |

pub mod json;
pub mod toml;
pub mod yaml;

use crate::config::CodecConfig;
use crate::document::Document;
use crate::{Error, Result};
use std::path::Path;

/// Parses text into a document. The second argument names the source for
/// error messages.
pub type DecodeFn = fn(&str, &str) -> Result<Document>;

/// Renders a document as text. The last argument names the destination for
/// error messages.
pub type EncodeFn = fn(&Document, &CodecConfig, &str) -> Result<String>;

/// Parse and emit functions for one format.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    /// Text to document.
    pub decode: DecodeFn,
    /// Document to text.
    pub encode: EncodeFn,
}

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON, written pretty-printed.
    Json,
    /// YAML, single document.
    Yaml,
    /// TOML, top-level table only.
    Toml,
}

/// Extension routing table. Lookups are exact and case-sensitive.
const EXTENSIONS: &[(&str, Format)] = &[
    ("json", Format::Json),
    ("yaml", Format::Yaml),
    ("yml", Format::Yaml),
    ("toml", Format::Toml),
];

impl Format {
    /// Returns all supported formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Json, Self::Yaml, Self::Toml]
    }

    /// Returns the canonical name, which is also the preferred extension.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Returns the codec for this format.
    #[must_use]
    pub const fn codec(&self) -> Codec {
        match self {
            Self::Json => Codec {
                decode: json::decode,
                encode: json::encode,
            },
            Self::Yaml => Codec {
                decode: yaml::decode,
                encode: yaml::encode,
            },
            Self::Toml => Codec {
                decode: toml::decode,
                encode: toml::encode,
            },
        }
    }

    /// Looks up a format by extension, with or without the leading dot.
    ///
    /// Returns `None` if the extension is not recognized. `JSON` is not
    /// `json`.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, format)| *format)
    }

    /// Detects the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the path has no extension or
    /// the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().map(|e| e.to_string_lossy());

        ext.as_deref()
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat {
                extension: ext.map(|e| format!(".{e}")).unwrap_or_default(),
                path: path.to_path_buf(),
            })
    }

    /// Parses `text` as this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseFailure`] if the text is malformed or has the
    /// wrong top-level shape.
    pub fn decode(&self, text: &str, origin: &str) -> Result<Document> {
        (self.codec().decode)(text, origin)
    }

    /// Renders `document` as this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializeFailure`] if the document cannot be
    /// expressed in this format.
    pub fn encode(
        &self,
        document: &Document,
        config: &CodecConfig,
        origin: &str,
    ) -> Result<String> {
        (self.codec().encode)(document, config, origin)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
