//! Configuration assembly, override resolution and loading
//!
//! Parsed rules are folded into a group → key → label map, then collapsed
//! against the caller's override labels (later labels win, `default` last).

pub mod assemble;
pub mod loader;
pub mod resolve;

pub use assemble::assemble;
pub use loader::{load, load_str};
pub use resolve::{resolve, ResolvedConfig, ResolvedGroup};
