//! Shared CLI utilities.

use anyhow::{Context, Result};
use groupconf::ResolvedConfig;
use std::path::Path;

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

/// Load `path` with the given override labels, adding the file name as context.
pub fn load_with_context(path: &Path, overrides: &[String]) -> Result<ResolvedConfig> {
    tracing::debug!(path = %path.display(), ?overrides, "loading configuration");
    groupconf::load(path, overrides)
        .with_context(|| format!("Unable to read config file {}", path.display()))
}
