//! Named JSON values that survive a restart.
//!
//! [`KeyValueStore`] never fails towards its caller: a missing or corrupt
//! value reads as the supplied default, and a failed write is logged and
//! dropped. Backends are swappable so tests can run against memory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use leadhook_logging::{hook_debug, hook_error, hook_warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string storage keyed by name.
pub trait StorageBackend: Send {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` verbatim, bypassing serialization.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    writer: AtomicFileWriter,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        Ok(self.dir().join(file_name(key)?))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let name = file_name(key)?;
        self.writer.write(&name, value)?;
        Ok(())
    }
}

fn file_name(key: &str) -> Result<String, StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(format!("{key}.json"))
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyValueStore<B> {
    backend: B,
}

impl<B: StorageBackend> KeyValueStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The value under `key`, or `default` if it is missing or unreadable.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                hook_debug!("store key {} not set; using default", key);
                return default;
            }
            Err(err) => {
                hook_warn!("Failed to load store key {}: {}", key, err);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                hook_warn!("Discarding unreadable value for store key {}: {}", key, err);
                default
            }
        }
    }

    /// Serializes and stores `value`. Failures are logged, not returned.
    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            hook_error!("Failed to write store key {}: {}", key, err);
        }
    }

    pub fn try_write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.backend.save(key, &text)
    }
}
