//! Line loading and noise removal ahead of contact extraction

use crate::error::{ExtractError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Lines starting with this marker are quoted from an earlier message
pub const THREAD_MARKER: char = '>';

/// Default occurrence count at which a line is treated as boilerplate
pub const HIGH_FREQUENCY_THRESHOLD: usize = 90;

/// Read a corpus file into lines, in file order.
///
/// Both `\n` and `\r\n` endings are accepted and stripped. Bytes that are
/// not valid UTF-8 are replaced rather than rejected.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| ExtractError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&String::from_utf8_lossy(&raw));
    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split an in-memory corpus into owned lines
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Drop every line whose first character is [`THREAD_MARKER`]
#[must_use]
pub fn remove_thread_lines(mut lines: Vec<String>) -> Vec<String> {
    let before = lines.len();
    lines.retain(|line| !line.starts_with(THREAD_MARKER));
    debug!("Removed {} thread lines", before - lines.len());
    lines
}

/// Drop every occurrence of any line that appears `threshold` times or more
#[must_use]
pub fn remove_high_frequency_lines(lines: Vec<String>, threshold: usize) -> Vec<String> {
    let mut histogram: HashMap<&str, usize> = HashMap::new();
    for line in &lines {
        *histogram.entry(line.as_str()).or_default() += 1;
    }

    let frequent: HashSet<String> = histogram
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(line, _)| line.to_string())
        .collect();

    if frequent.is_empty() {
        return lines;
    }

    debug!(
        "Removing {} high frequency lines (threshold {threshold})",
        frequent.len()
    );
    lines
        .into_iter()
        .filter(|line| !frequent.contains(line))
        .collect()
}
