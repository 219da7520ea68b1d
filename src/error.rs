//! Error types for tabnine-config.
//!
//! Loading a config never fails; these errors only come from the strict
//! read path and from commands that write files.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tabnine-config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// User provided invalid arguments or asked for something unsafe.
    #[error("{0}")]
    UserError(String),

    /// A config file could not be read.
    #[error("Read failed: {0}")]
    Read(String),

    /// A config file could not be written.
    #[error("Write failed: {0}")]
    Write(String),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::UserError(_) => exit_codes::USER_ERROR,
            ConfigError::Read(_) | ConfigError::Write(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for tabnine-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
