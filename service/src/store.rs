//! Named-slot key-value persistence.
//!
//! [`FileStore`] keeps one JSON file per slot under a directory so values
//! survive across sessions. [`MemoryStore`] keeps values in process.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid slot name '{0}'")]
    InvalidKey(String),

    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Opaque get/set of named string values.
pub trait KeyValueStore: Send + Sync {
    /// Read the value in `key`, or `None` if the slot has never been written.
    ///
    /// # Errors
    /// Returns an error if the slot exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value in `key`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Directory-backed store: slot `name` lives in `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        // Write beside the target and rename so readers never see a partial value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_err(&path))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("rep-favorites").unwrap(), None);

        store.set("rep-favorites", "[]").unwrap();
        assert_eq!(store.get("rep-favorites").unwrap().as_deref(), Some("[]"));

        store.set("rep-favorites", "[1]").unwrap();
        assert_eq!(store.get("rep-favorites").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("rep-favorites").unwrap(), None);
    }

    #[test]
    fn file_store_creates_directory_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("repfinder");

        FileStore::new(&nested).set("rep-favorites", "[]").unwrap();

        // A fresh handle sees the value written by the first one.
        let reopened = FileStore::new(&nested);
        assert_eq!(reopened.get("rep-favorites").unwrap().as_deref(), Some("[]"));
        assert!(nested.join("rep-favorites.json").exists());
        assert!(!nested.join("rep-favorites.json.tmp").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", "slot.json"] {
            assert!(
                matches!(store.get(key), Err(StoreError::InvalidKey(_))),
                "key '{key}'"
            );
            assert!(matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))));
        }
    }
}
