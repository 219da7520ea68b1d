//! CLI argument parsing for tabnine-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and create project `.tabnine` files.
///
/// A `.tabnine` file can opt a project out of team learning entirely, or
/// exclude individual paths with ignore masks (`*`, `*.ext`, `dir/*`, `dir`).
#[derive(Parser, Debug)]
#[command(name = "tabnine-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the project config file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Fail when the config file cannot be read instead of using defaults.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration.
    Show,

    /// Report which paths are excluded from team learning.
    ///
    /// Exits 0 if at least one path is ignored, 1 otherwise.
    Check(CheckArgs),

    /// Write a new config file.
    Init(InitArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to test, as they appear relative to the project root.
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Print nothing; only set the exit code.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,

    /// Opt the whole project out of team learning.
    #[arg(long)]
    pub disable_team_learning: bool,

    /// Ignore masks to write (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
