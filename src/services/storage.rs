use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Errors raised by durable storage backends.
///
/// Callers in this crate never propagate these; they log and carry on as if
/// storage were unavailable.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read storage file {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to serialize storage entries: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}

/// String-only key/value storage that survives restarts.
#[cfg_attr(test, mockall::automock)]
pub trait DurableStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage, mostly useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a flat YAML mapping on disk.
///
/// The file is re-read on every access so that several contexts (or
/// processes) pointed at the same file observe each other's writes.
#[derive(Debug)]
pub struct FileStorage {
    path: Utf8PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn load_entries(&self) -> Result<IndexMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(IndexMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(IndexMap::new());
        }

        serde_yaml_ng::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save_entries(&self, entries: &IndexMap<String, String>) -> Result<(), StorageError> {
        let yaml = serde_yaml_ng::to_string(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, yaml).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load_entries()?;
        Ok(entries.swap_remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)?;

        tracing::debug!("Stored '{}' in {}", key, self.path);
        Ok(())
    }
}
