//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::load_with_context;
use super::{OutputFormat, ResolveArgs};
use groupconf::render::{render_json, render_text};

#[derive(Args)]
pub struct ShowArgs {
    /// Configuration file to load
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let overrides = args.resolve.override_labels();
    let config = load_with_context(&args.path, &overrides)?;

    match args.resolve.format {
        OutputFormat::Text => print!("{}", render_text(&config)),
        OutputFormat::Json => println!("{}", render_json(&config)?),
    }
    Ok(())
}
