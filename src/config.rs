//! Options controlling one extraction run

use crate::error::{ExtractError, Result};
use crate::preprocess::HIGH_FREQUENCY_THRESHOLD;
use crate::signature::SignaturePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Switches and thresholds for [`Extractor::parse`](crate::Extractor::parse)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Drop quoted `>` lines before scanning
    pub ignore_threads: bool,

    /// Drop boilerplate lines repeated across the corpus
    pub remove_duplicates: bool,

    /// Occurrence count at which a line counts as boilerplate
    pub high_frequency_threshold: usize,

    /// Signature start/stop limits
    pub signature: SignaturePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_threads: true,
            remove_duplicates: false,
            high_frequency_threshold: HIGH_FREQUENCY_THRESHOLD,
            signature: SignaturePolicy::default(),
        }
    }
}

impl ParseOptions {
    /// Read options from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExtractError::InvalidConfig(format!("{}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ExtractError::InvalidConfig(e.to_string()))
    }
}
