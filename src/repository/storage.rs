//! Key-value persistence collaborator.
//!
//! The wardrobe store reads and writes one JSON document per key and treats
//! the backend as a plain key-value surface, the same contract the original
//! browser build had against `localStorage`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::repository::errors::RepositoryResult;

/// Key-value read/write of full documents.
///
/// `write` replaces the stored document atomically from the caller's
/// perspective; `read` returns the last written document or `None`.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>>;
    fn write(&self, key: &str, document: &str) -> RepositoryResult<()>;
}

/// File-backed store keeping one `<key>.json` document per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, document: &str) -> RepositoryResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.document_path(key);
        // Write-then-rename so a concurrent read never observes a torn
        // document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Shared in-memory store for unit tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_document(key: &str, document: &str) -> Self {
        let storage = Self::default();
        storage
            .documents
            .lock()
            .expect("memory storage lock")
            .insert(key.to_string(), document.to_string());
        storage
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| crate::repository::errors::RepositoryError::Poisoned)?;
        Ok(documents.get(key).cloned())
    }

    fn write(&self, key: &str, document: &str) -> RepositoryResult<()> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| crate::repository::errors::RepositoryError::Poisoned)?;
        documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
