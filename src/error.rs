//! Error types for loading and querying configurations

use std::io;
use thiserror::Error;

/// What was wrong with a line that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxKind {
    /// The line is neither a group header, a setting, a comment nor blank.
    #[error("line is not a group header, setting or comment")]
    Unrecognized,

    #[error("setting has no key")]
    MissingKey,

    #[error("setting has no value")]
    MissingValue,

    #[error("unterminated quoted string")]
    UnterminatedString,

    /// A setting appeared before the first group header.
    #[error("setting appears before any group header")]
    SettingOutsideGroup,

    /// An override was declared for a key that has no default value yet.
    #[error("override '{label}' for key '{key}' appears before its default value")]
    OverrideWithoutDefault {
        /// Key the override was attached to.
        key: String,
        /// Override label, e.g. `staging`.
        label: String,
    },
}

/// Load-time configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration source.
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line could not be parsed or violates the file structure.
    #[error("Parse error in line {line}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Cause of the failure.
        #[source]
        kind: SyntaxKind,
    },

    /// A key reached resolution without a `default` entry.
    #[error("Key '{key}' in group '{group}' has no default value")]
    MissingDefault {
        /// Group holding the key.
        group: String,
        /// The incomplete key.
        key: String,
    },
}

impl ConfigError {
    pub(crate) fn syntax(line: usize, kind: SyntaxKind) -> Self {
        Self::Syntax { line, kind }
    }

    /// Line number for syntax errors, `None` for every other variant.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Query-time lookup error on a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown group '{group}'")]
    UnknownGroup { group: String },

    #[error("Unknown key '{key}' in group '{group}'")]
    UnknownKey { group: String, key: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
