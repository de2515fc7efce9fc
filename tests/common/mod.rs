//! Shared helpers for achievement integration tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use nidam_achievements::AchievementManager;

/// Create a temp directory and the database path inside it.
///
/// The `TempDir` must stay alive for the duration of the test.
pub fn temp_db_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("stats.db");
    (dir, path)
}

/// Open a manager backed by the database at `path`
pub fn manager_at(path: &Path) -> AchievementManager {
    AchievementManager::with_path(path).expect("Failed to open stats db")
}
