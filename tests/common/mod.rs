//! Helpers for integration tests.

use std::path::PathBuf;

use smartfit::repository::storage::FileStorage;
use tempfile::TempDir;

/// Temporary storage directory used in integration tests.
pub struct TestStore {
    tempdir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            tempdir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// A fresh storage handle over the same directory; opening several
    /// simulates process restarts against the same persisted state.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.tempdir.path())
    }

    pub fn document_path(&self, key: &str) -> PathBuf {
        self.tempdir.path().join(format!("{key}.json"))
    }
}
