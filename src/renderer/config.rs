//! Configuration for markup rendering

use serde::Deserialize;

/// Configuration options for markup output
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape XML special characters in text attribute values
    ///
    /// Off by default: text values are embedded verbatim, so a value
    /// containing `"` produces malformed markup.
    pub escape_attributes: bool,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether text attribute values are escaped
    pub fn with_escape_attributes(mut self, escape: bool) -> Self {
        self.escape_attributes = escape;
        self
    }
}
