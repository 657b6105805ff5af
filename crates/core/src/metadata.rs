//! Inline metadata tags declared in spec source files
//!
//! A spec may carry a single-line annotation anywhere in its source:
//!
//! ```text
//! // @metadata SkipCI
//! ```
//!
//! Everything after the marker on that line is a whitespace-separated
//! list of tag tokens. Only the first occurrence of the marker counts.

use std::path::Path;

use crate::error::YokeResult;

/// Marker that introduces the tag list. The trailing space is part of
/// the marker so `// @metadataX` does not match.
pub const METADATA_MARKER: &str = "// @metadata ";

/// Extract the tag tokens from a spec file's full source text.
///
/// Returns an empty list when no marker is present. Subsequent marker
/// occurrences are ignored.
pub fn extract_tags(source: &str) -> Vec<String> {
    match source.find(METADATA_MARKER) {
        Some(start) => {
            let rest = &source[start + METADATA_MARKER.len()..];
            let line = rest.split(['\r', '\n']).next().unwrap_or("");
            line.split_whitespace().map(str::to_string).collect()
        }
        None => Vec::new(),
    }
}

/// Read a spec file and extract its tags. I/O errors propagate to the
/// caller, which decides whether they are terminal for that spec.
pub fn read_tags(path: &Path) -> YokeResult<Vec<String>> {
    let source = std::fs::read_to_string(path)?;
    Ok(extract_tags(&source))
}
