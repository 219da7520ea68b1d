//! tabnine-config: inspect and create project `.tabnine` files.
//!
//! Parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

use std::process::ExitCode;
use tabnine_config::cli::Cli;
use tabnine_config::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
