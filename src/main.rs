//! groupconf: grouped configuration files with named overrides
//!
//! Loads an INI-like configuration file, resolves override labels such as
//! `staging` or `ubuntu`, and prints the result.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
