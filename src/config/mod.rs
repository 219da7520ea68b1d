//! Project configuration for team learning.
//!
//! This module defines the Config struct that represents a `.tabnine` file.
//! Loading is best-effort: a missing, empty, or malformed file yields
//! defaults instead of an error, and unknown keys are ignored.

mod model;
mod operations;
mod parser;


use std::path::Path;

// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};

/// Load the config at `path`, using defaults for anything missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    Config::load(path)
}
