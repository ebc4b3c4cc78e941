//! Handle list input
//!
//! Reads the newline-delimited handle list: lines are trimmed, blank lines
//! dropped, and duplicates removed while preserving first occurrence. The
//! resulting order is the scan order and the user-visible reporting order.
//!
//! Handles are opaque strings; no case folding or other normalization is
//! applied, so uniqueness is by exact string equality.

use crate::InputError;
use std::collections::HashSet;
use std::path::Path;

/// Reads and deduplicates the handle list at `path`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Distinct handles in first-seen order
/// * `Err(InputError)` - Unreadable file, or no handles left after
///   trimming; both are fatal startup conditions
pub fn read_handles(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let handles = dedup_lines(&content);

    if handles.is_empty() {
        return Err(InputError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(handles)
}

/// Trims, drops blanks, and deduplicates preserving first occurrence.
fn dedup_lines(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}
