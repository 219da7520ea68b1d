//! Team-learning ignore masks.
//!
//! Each mask from `teamLearningIgnore` is classified once, when it is loaded:
//! - `*` matches every path
//! - `*<suffix>` matches paths ending in `<suffix>`
//! - `<dir>/*` matches paths under `<dir>/`, but not `<dir>` itself
//! - anything else matches the path itself or anything under `<path>/`
//!
//! Only a single leading `*` or a trailing `/*` is meaningful. Any other `*`
//! is compared literally. Comparisons are case-sensitive and operate on the
//! raw string; no path normalization happens here.

/// How a mask matches candidate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskKind {
    /// The lone `*` mask.
    CatchAll,
    /// Leading `*`: the path must end with this suffix.
    Suffix(String),
    /// Trailing `/*`: the path must start with this directory followed by `/`.
    Prefix(String),
    /// No recognized wildcard: the path must equal this string or live under it.
    ExactOrChild(String),
}

impl MaskKind {
    /// Classify a (trimmed) mask pattern.
    pub fn classify(pattern: &str) -> Self {
        if pattern == "*" {
            return Self::CatchAll;
        }
        if let Some(suffix) = pattern.strip_prefix('*') {
            return Self::Suffix(suffix.to_string());
        }
        if let Some(dir) = pattern.strip_suffix("/*") {
            return Self::Prefix(dir.to_string());
        }
        Self::ExactOrChild(pattern.to_string())
    }
}

/// A single ignore mask with its precomputed kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreMask {
    pattern: String,
    kind: MaskKind,
}

impl IgnoreMask {
    /// Build a mask from a raw pattern.
    ///
    /// The pattern is trimmed; `None` is returned when nothing is left.
    pub fn new(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return None;
        }
        Some(Self {
            pattern: pattern.to_string(),
            kind: MaskKind::classify(pattern),
        })
    }

    /// The mask as written in the config file (trimmed).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> &MaskKind {
        &self.kind
    }

    /// Check whether `path` is covered by this mask.
    pub fn matches(&self, path: &str) -> bool {
        match &self.kind {
            MaskKind::CatchAll => true,
            MaskKind::Suffix(suffix) => path.ends_with(suffix.as_str()),
            MaskKind::Prefix(dir) => is_under_directory(path, dir),
            MaskKind::ExactOrChild(dir) => path == dir || is_under_directory(path, dir),
        }
    }
}

impl std::fmt::Display for IgnoreMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Check if `path` is `dir` followed by `/` and anything (possibly nothing).
///
/// For example, `src/tests/unit.cpp` is under `src/tests`, while
/// `src/tests_old/unit.cpp` and `src/tests` itself are not.
fn is_under_directory(path: &str, dir: &str) -> bool {
    path.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}
