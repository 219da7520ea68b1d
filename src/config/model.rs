//! Config struct definition and the ignore-matching queries on it.

use crate::ignore::IgnoreMask;

/// Conventional name of the project config file.
pub const DEFAULT_CONFIG_FILE: &str = ".tabnine";

pub(crate) const DISABLE_TEAM_LEARNING_KEY: &str = "disableTeamLearning";
pub(crate) const TEAM_LEARNING_IGNORE_KEY: &str = "teamLearningIgnore";

/// Project-level settings for team learning.
///
/// This struct represents the contents of a `.tabnine` file. It is built once
/// and never mutated; blank masks are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Opt the whole project out of team learning (default: false).
    disable_team_learning: bool,

    /// Masks excluding paths from team learning, in file order.
    team_learning_ignore: Vec<IgnoreMask>,
}

impl Config {
    /// Build a config from already-extracted values.
    ///
    /// Each pattern is trimmed; patterns that end up empty are discarded.
    pub fn new<I, S>(disable_team_learning: bool, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            disable_team_learning,
            team_learning_ignore: patterns
                .into_iter()
                .filter_map(|p| IgnoreMask::new(p.as_ref()))
                .collect(),
        }
    }

    pub fn disable_team_learning(&self) -> bool {
        self.disable_team_learning
    }

    pub fn team_learning_ignore(&self) -> &[IgnoreMask] {
        &self.team_learning_ignore
    }

    /// Check whether `path` is excluded from team learning by any mask.
    ///
    /// Masks are tried in order; the first match wins. An empty mask list
    /// ignores nothing.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.matching_mask(path).is_some()
    }

    /// Return the first mask that covers `path`, if any.
    pub fn matching_mask(&self, path: &str) -> Option<&IgnoreMask> {
        self.team_learning_ignore.iter().find(|m| m.matches(path))
    }

    /// Whether team learning may collect `path` at all.
    pub fn collects(&self, path: &str) -> bool {
        !self.disable_team_learning && !self.is_ignored(path)
    }
}
