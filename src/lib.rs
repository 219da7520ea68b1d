//! Project-level `.tabnine` configuration.
//!
//! Loads the `disableTeamLearning` switch and the `teamLearningIgnore` masks
//! from a project's `.tabnine` file and answers whether a path is excluded
//! from team learning.
//!
//! ```no_run
//! use tabnine_config::load_config;
//!
//! let config = load_config(".tabnine");
//! if !config.is_ignored("src/main.rs") {
//!     // eligible for team learning
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ignore;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use config::{Config, DEFAULT_CONFIG_FILE, load_config};
pub use ignore::{IgnoreMask, MaskKind};
