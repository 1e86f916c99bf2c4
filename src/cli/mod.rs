//! Command-line interface for groupconf
//!
//! Provides `show`, `get` and `check` subcommands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod get;
mod show;
mod utils;

/// Load grouped configuration files and resolve named overrides
#[derive(Parser)]
#[command(name = "groupconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show(show::ShowArgs),

    /// Print a single resolved value
    Get(get::GetArgs),

    /// Validate a configuration file without resolving overrides
    Check(check::CheckArgs),
}

/// Options shared by commands that resolve overrides.
#[derive(Args)]
pub struct ResolveArgs {
    /// Override labels, least to most significant (comma-separated)
    #[arg(short = 'o', long, value_name = "LABELS", env = "GROUPCONF_OVERRIDES")]
    pub overrides: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,
}

impl ResolveArgs {
    pub fn override_labels(&self) -> Vec<String> {
        utils::parse_csv(&self.overrides).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Check(args) => check::run(args),
    }
}
