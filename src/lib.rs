//! groupconf: grouped configuration files with named overrides
//!
//! Parses line-oriented, INI-like files into typed settings and resolves
//! environment-specific overrides (`path<staging> = ...`) into a read-only
//! group → key → value tree.
//!
//! ```no_run
//! let config = groupconf::load("server.conf", &["staging", "ubuntu"])?;
//! let path = config.get("ftp", "path")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod parse;
pub mod render;

pub use config::{assemble, load, load_str, resolve, ResolvedConfig};
pub use domain::{LocatedRule, NestedConfig, Rule, Value, DEFAULT_LABEL};
pub use error::{ConfigError, ConfigResult, LookupError, SyntaxKind};
pub use parse::parse_lines;
