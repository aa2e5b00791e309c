//! Error types for contact extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing or exporting
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The corpus could not be opened or read
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing was requested before any corpus was loaded
    #[error("A corpus must be loaded before parsing")]
    NotLoaded,

    /// Export requested in a rendering we do not produce
    #[error("Unsupported export format: {0} (expected vcard or dict)")]
    UnsupportedFormat(String),

    /// Contact could not be serialized
    #[error("Failed to serialize contact: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Options file could not be read or deserialized
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
