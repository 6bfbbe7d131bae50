//! Key-value blob storage
//!
//! The app persists everything (tuning, high scores, collections) as opaque
//! string blobs keyed by name. Persistence is best-effort: backends log
//! failures and callers fall back to defaults rather than propagating errors.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// String-blob key-value store.
pub trait KvStore {
    /// Fetch the blob for `key`, if present
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: &str);
    /// Remove the blob for `key` (no-op if absent)
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.blobs.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.blobs.remove(key);
    }
}

/// File-backed store: one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            log::warn!("Failed to create data dir {}: {err}", dir.display());
        }
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal identifiers (snake_case), safe as file names
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Some(blob),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Failed to read {}: {err}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(err) = fs::write(&path, value) {
            log::warn!("Failed to write {}: {err}", path.display());
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("Failed to remove {}: {err}", path.display()),
        }
    }
}
