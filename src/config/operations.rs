//! Config loading, serialization, and the printable summary.

use super::model::Config;
use super::parser::parse_fields;
use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// On-disk shape of a `.tabnine` file, used when writing one out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile<'a> {
    disable_team_learning: bool,
    team_learning_ignore: Vec<&'a str>,
}

impl Config {
    /// Load config from a `.tabnine` file, falling back to defaults.
    ///
    /// This never fails. A missing file is the common case and yields the
    /// default config; an unreadable file is logged and does the same.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_text(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Load config from a `.tabnine` file, reporting I/O failures.
    ///
    /// Unlike [`Config::load`], a missing or unreadable file is an error.
    /// The content itself is still parsed leniently.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Read(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_text(&content))
    }

    /// Parse config from the text of a `.tabnine` file.
    ///
    /// Field order does not matter and unknown keys are ignored. A field whose
    /// value cannot be extracted keeps its default.
    pub fn from_text(text: &str) -> Self {
        let fields = parse_fields(text);
        let patterns = fields.team_learning_ignore.unwrap_or_default();
        let config = Self::new(fields.disable_team_learning.unwrap_or_default(), &patterns);

        let discarded = patterns.len() - config.team_learning_ignore().len();
        if discarded > 0 {
            debug!(discarded, "dropped blank team learning ignore masks");
        }

        config
    }

    /// Serialize config to the JSON shape of a `.tabnine` file.
    pub fn to_json(&self) -> Result<String> {
        let file = ConfigFile {
            disable_team_learning: self.disable_team_learning(),
            team_learning_ignore: self
                .team_learning_ignore()
                .iter()
                .map(|m| m.pattern())
                .collect(),
        };

        serde_json::to_string_pretty(&file)
            .map_err(|e| ConfigError::Write(format!("failed to serialize config to JSON: {}", e)))
    }

    /// Write the human-readable summary (the `Display` text) to `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Print the human-readable summary to stdout.
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_summary(&mut stdout)?;
        stdout.flush()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Disable Team Learning: {}", self.disable_team_learning())?;
        writeln!(
            f,
            "Team Learning Ignore Masks ({}):",
            self.team_learning_ignore().len()
        )?;
        for mask in self.team_learning_ignore() {
            writeln!(f, "  - {}", mask)?;
        }
        Ok(())
    }
}
