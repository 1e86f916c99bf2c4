//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use groupconf::parse::{numbered_lines, parse_lines};
use groupconf::{assemble, Rule};

#[derive(Args)]
pub struct CheckArgs {
    /// Configuration file to validate
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed reading config file: {}", args.path.display()))?;

    let rules = parse_lines(numbered_lines(&content))
        .with_context(|| format!("Invalid config file {}", args.path.display()))?;
    let nested = assemble(&rules)
        .with_context(|| format!("Invalid config file {}", args.path.display()))?;

    let settings = rules.iter().filter(|r| matches!(r.rule, Rule::Setting { .. })).count();
    let mut labels: Vec<&str> = nested
        .values()
        .flat_map(|entries| entries.values())
        .flat_map(|values| values.keys().map(String::as_str))
        .filter(|label| *label != groupconf::DEFAULT_LABEL)
        .collect();
    labels.sort_unstable();
    labels.dedup();

    println!("{}: OK", args.path.display());
    println!("  Groups: {}", nested.len());
    println!("  Settings: {}", settings);
    if !labels.is_empty() {
        println!("  Override labels: {}", labels.join(", "));
    }
    Ok(())
}
