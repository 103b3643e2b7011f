// SPDX-License-Identifier: MPL-2.0
//! Flat string key-value stores backing the session.
//!
//! [`MemoryStore`] keeps everything in memory and is what tests inject.
//! [`FileStore`] writes the whole map to a CBOR file on every change.
//!
//! # Path Resolution
//!
//! The store file location can be customized for testing or portable deployments:
//! 1. Use [`FileStore::open_in`] with an explicit directory
//! 2. Set `STOREIT_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
pub const STORE_FILE: &str = "session.cbor";

/// String keys mapped to stringified values.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// CBOR-backed store, written through on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns the store and an optional warning i18n key. A missing file is
    /// not a warning; an unreadable or corrupt one is, and starts empty.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, falling back to the default resolution.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        match paths::get_app_data_dir_with_override(base_dir) {
            Some(mut path) => {
                path.push(STORE_FILE);
                Self::open_at(path)
            }
            None => (
                Self {
                    path: PathBuf::from(STORE_FILE),
                    entries: BTreeMap::new(),
                },
                Some("notification-store-path-error".to_string()),
            ),
        }
    }

    /// Opens the store backed by the file at `path`.
    pub fn open_at(path: PathBuf) -> (Self, Option<String>) {
        if !path.exists() {
            return (
                Self {
                    path,
                    entries: BTreeMap::new(),
                },
                None,
            );
        }

        let (entries, warning) = match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(entries) => (entries, None),
                Err(err) => {
                    log::warn!("session store {} is corrupt: {err}", path.display());
                    (
                        BTreeMap::new(),
                        Some("notification-store-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                log::warn!("cannot read session store {}: {err}", path.display());
                (
                    BTreeMap::new(),
                    Some("notification-store-read-error".to_string()),
                )
            }
        };

        (Self { path, entries }, warning)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        ciborium::into_writer(entries, BufWriter::new(file))
            .map_err(|err| Error::Store(err.to_string()))
    }

    /// Applies `change` to a copy of the map and commits it only once the
    /// copy is on disk, so a failed write leaves the store unchanged.
    fn commit(&mut self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut next = self.entries.clone();
        change(&mut next);
        Self::write(&self.path, &next).map_err(|err| {
            log::warn!("failed to write session store {}: {err}", self.path.display());
            match err {
                Error::Io(message) => Error::Store(message),
                other => other,
            }
        })?;
        self.entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.commit(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        self.commit(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("isLoggedIn", "true").unwrap();
        assert_eq!(store.get("isLoggedIn").as_deref(), Some("true"));
        store.remove("isLoggedIn").unwrap();
        assert!(store.get("isLoggedIn").is_none());
    }

    #[test]
    fn file_store_missing_file_is_empty_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(store.get("userEmail").is_none());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempdir().expect("failed to create temp dir");
        let base = Some(dir.path().join("nested"));

        let (mut store, _) = FileStore::open_in(base.clone());
        store.set("userEmail", "ana@example.com").unwrap();
        store.set("autoSave", "true").unwrap();
        store.remove("autoSave").unwrap();

        let (reopened, warning) = FileStore::open_in(base);
        assert!(warning.is_none());
        assert_eq!(
            reopened.get("userEmail").as_deref(),
            Some("ana@example.com")
        );
        assert!(reopened.get("autoSave").is_none());
    }

    #[test]
    fn corrupt_file_yields_empty_store_and_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, b"\xff\x00 not cbor").unwrap();

        let (store, warning) = FileStore::open_at(path);
        assert_eq!(
            warning.as_deref(),
            Some("notification-store-parse-error")
        );
        assert!(store.get("isLoggedIn").is_none());
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let dir = tempdir().expect("failed to create temp dir");
        // A directory where the file should be makes File::create fail.
        let path = dir.path().join(STORE_FILE);
        fs::create_dir_all(&path).unwrap();

        let mut store = FileStore {
            path,
            entries: BTreeMap::new(),
        };
        let result = store.set("notifications", "true");
        assert!(matches!(result, Err(Error::Store(_))));
        assert!(store.get("notifications").is_none());
    }
}
