//! Implementation of the `check` command.

use super::output_error;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use std::io::Write;

/// Report, per path, whether it is ignored and by which mask.
///
/// Returns `SUCCESS` if any path is ignored and `NOT_IGNORED` otherwise.
pub fn cmd_check<W: Write>(config: &Config, args: &CheckArgs, out: &mut W) -> Result<i32> {
    let mut any_ignored = false;

    for path in &args.paths {
        let mask = config.matching_mask(path);
        any_ignored |= mask.is_some();

        if args.quiet {
            continue;
        }
        let written = match mask {
            Some(mask) => writeln!(out, "ignored   {}  (mask: {})", path, mask),
            None => writeln!(out, "included  {}", path),
        };
        written.map_err(output_error)?;
    }

    if config.disable_team_learning() && !args.quiet {
        writeln!(out, "\nNote: team learning is disabled for this project.")
            .map_err(output_error)?;
    }

    Ok(if any_ignored {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_IGNORED
    })
}
