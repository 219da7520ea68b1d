use crate::config::DEFAULT_CONFIG_FILE;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Runs a test from inside a project directory so the relative `.tabnine`
/// resolves there. The previous cwd comes back on drop.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // One cwd per process; hold it until the guard drops.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a temp project directory containing a `.tabnine` with `content`.
pub(crate) fn create_project_with_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Build the text of a `.tabnine` file the way users usually write one.
pub(crate) fn ignore_config(masks: &[&str]) -> String {
    let quoted: Vec<String> = masks.iter().map(|m| format!("\"{}\"", m)).collect();
    format!(
        "{{\n    \"teamLearningIgnore\": [{}]\n}}\n",
        quoted.join(", ")
    )
}
