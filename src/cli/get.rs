//! Get command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::load_with_context;
use super::{OutputFormat, ResolveArgs};
use groupconf::render::render_value_json;

#[derive(Args)]
pub struct GetArgs {
    /// Configuration file to load
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Group name (the bracketed header)
    #[arg(value_name = "GROUP")]
    pub group: String,

    /// Setting key within the group
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let overrides = args.resolve.override_labels();
    let config = load_with_context(&args.path, &overrides)?;
    let value = config.get(&args.group, &args.key)?;

    tracing::debug!(group = %args.group, key = %args.key, kind = value.type_name(), "resolved value");
    match args.resolve.format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", render_value_json(value)?),
    }
    Ok(())
}
