//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod report;
pub mod run;
pub mod sites;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Panelbot - daily TronPanel totals on Telegram.
#[derive(Parser, Debug)]
#[command(name = "panelbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run(RunArgs),

    /// Fetch today's report once and print it
    Report(ConfigPathArg),

    /// List the configured sites
    Sites(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `panelbot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and required environment
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
