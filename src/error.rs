//! Error types for saving graphics and loading scenes

use thiserror::Error;

/// Errors that can occur while loading a scene file
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("shape #{index} has no 'kind'")]
    MissingKind { index: usize },

    #[error("shape #{index} has unknown kind '{kind}' (expected circle, rect, polygon or line)")]
    UnknownKind { index: usize, kind: String },

    #[error("shape #{index} ({kind}) is missing required field '{field}'")]
    MissingField {
        index: usize,
        kind: &'static str,
        field: &'static str,
    },

    #[error("shape #{index} ({kind}) has invalid '{field}': {reason}")]
    InvalidGeometry {
        index: usize,
        kind: &'static str,
        field: &'static str,
        reason: String,
    },
}

/// Errors surfaced by the library and command-line tool
#[derive(Error, Debug)]
pub enum Error {
    /// Writing or flushing the output sink failed
    #[error("failed to write SVG output: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}
