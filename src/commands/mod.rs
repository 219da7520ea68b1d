//! Command implementations for tabnine-config.
//!
//! Each command writes its report to the given writer and returns the
//! process exit code on success.

mod check;
mod init;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::exit_codes;
use std::io::{self, Write};
use std::path::Path;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let mut out = io::stdout().lock();
    run(cli, &mut out)
}

/// Run a command, writing user-facing output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<i32> {
    match cli.command {
        Command::Show => cmd_show(&load(&cli.config, cli.strict)?, out),
        Command::Check(args) => check::cmd_check(&load(&cli.config, cli.strict)?, &args, out),
        Command::Init(args) => init::cmd_init(&cli.config, &args, out),
    }
}

/// Load the config, honoring `--strict`.
fn load(path: &Path, strict: bool) -> Result<Config> {
    if strict {
        Config::read(path)
    } else {
        Ok(Config::load(path))
    }
}

fn cmd_show<W: Write>(config: &Config, out: &mut W) -> Result<i32> {
    config.write_summary(out).map_err(output_error)?;
    Ok(exit_codes::SUCCESS)
}

pub(crate) fn output_error(e: io::Error) -> ConfigError {
    ConfigError::Write(format!("failed to write output: {}", e))
}
