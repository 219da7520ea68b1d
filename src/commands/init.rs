//! Implementation of the `init` command.

use super::output_error;
use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::exit_codes;
use crate::fs::atomic_write_file;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write a new config file at `path`.
///
/// Refuses to replace an existing file unless `--force` is given. Blank
/// `--ignore` entries are dropped the same way loading drops them.
pub fn cmd_init<W: Write>(path: &Path, args: &InitArgs, out: &mut W) -> Result<i32> {
    if path.exists() && !args.force {
        return Err(ConfigError::UserError(format!(
            "'{}' already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    let config = Config::new(args.disable_team_learning, &args.ignore);
    let mut content = config.to_json()?;
    content.push('\n');

    atomic_write_file(path, &content)?;
    info!(
        path = %path.display(),
        masks = config.team_learning_ignore().len(),
        "wrote config file"
    );

    writeln!(out, "Wrote {}", path.display()).map_err(output_error)?;
    write!(out, "{}", config).map_err(output_error)?;

    Ok(exit_codes::SUCCESS)
}
