//! Atomic file writes for config files.
//!
//! Content goes to `.{filename}.tmp` next to the target, is synced to disk,
//! and is then renamed over the target. Readers therefore see either the old
//! file or the complete new one, never a partial write.

use crate::error::{ConfigError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Write(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    // rename() replaces the destination on both POSIX and Windows.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::Write(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ConfigError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(target.with_file_name(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConfigError::Write(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ConfigError::Write(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
