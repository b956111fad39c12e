//! Output options for document encoding.

/// Options that shape how documents are written.
///
/// Reading never consults these; every supported format is parsed the same
/// way regardless of how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Spaces per nesting level in JSON output.
    pub json_indent: usize,
    /// Use the TOML library's pretty emitter instead of its default one.
    pub toml_pretty: bool,
}

impl CodecConfig {
    /// Default JSON indentation width.
    pub const DEFAULT_JSON_INDENT: usize = 4;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            json_indent: Self::DEFAULT_JSON_INDENT,
            toml_pretty: false,
        }
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub const fn with_json_indent(mut self, spaces: usize) -> Self {
        self.json_indent = spaces;
        self
    }

    /// Enables or disables pretty TOML output.
    #[must_use]
    pub const fn with_toml_pretty(mut self, pretty: bool) -> Self {
        self.toml_pretty = pretty;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
