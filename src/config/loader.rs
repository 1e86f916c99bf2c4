//! Config file loading

use crate::config::assemble::assemble;
use crate::config::resolve::{resolve, ResolvedConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::parse::{numbered_lines, parse_lines};
use std::fs;
use std::path::Path;

/// Read, parse and resolve a configuration file.
///
/// `overrides` lists override labels from least to most significant.
pub fn load<P, S>(path: P, overrides: &[S]) -> ConfigResult<ResolvedConfig>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read config file");
    load_str(&content, overrides)
}

/// Parse and resolve configuration text already in memory.
pub fn load_str<S: AsRef<str>>(source: &str, overrides: &[S]) -> ConfigResult<ResolvedConfig> {
    let rules = parse_lines(numbered_lines(source))?;
    let nested = assemble(&rules)?;
    let config = resolve(&nested, overrides)?;

    tracing::debug!(
        groups = config.len(),
        overrides = ?overrides.iter().map(|s| s.as_ref()).collect::<Vec<&str>>(),
        "resolved configuration"
    );
    Ok(config)
}
