//! Key-value storage port and its backends.
//!
//! Everything metaphorever persists goes through the [`Storage`] trait: a
//! get/set/remove interface over string keys and string values. The cache
//! and the library never touch files or raw JSON themselves; they call
//! [`load_json`] and [`save_json`], which are the single place where
//! persisted text is turned into typed values and back.
//!
//! # Public API
//! - [`Storage`]: The port (object safe, synchronous)
//! - [`FileStorage`]: One JSON file per key under the data directory
//! - [`MemoryStorage`]: In-memory backend for tests and ephemeral sessions
//! - [`load_json`] / [`save_json`]: Typed access at the port boundary
//!
//! # File Layout
//! - Keys made of `[A-Za-z0-9_.-]` map to `<key>.json` so the data directory
//!   stays readable for debugging
//! - Any other key maps to `<md5(key)>.json`

use crate::core::dirs::get_data_directory;
use crate::core::error::{MetaphorError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait Storage: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read and deserialize the value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>> {
    match storage.get(key)? {
        Some(content) => serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| MetaphorError::storage_parse(key, e)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the platform data directory
    pub fn open_default() -> Result<Self> {
        let root = get_data_directory()?;
        log::debug!("Using data directory: {}", root.display());
        Ok(Self::new(root))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let readable = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        let file_name = if readable {
            format!("{key}.json")
        } else {
            format!("{:x}.json", md5::compute(key.as_bytes()))
        };
        self.root.join(file_name)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            log::debug!("No stored value for '{key}' at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read storage file '{}': {}", path.display(), e);
            MetaphorError::storage_read(&path, e)
        })?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            log::error!(
                "Failed to create data directory '{}': {}",
                self.root.display(),
                e
            );
            MetaphorError::storage_write(&self.root, e)
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| {
            log::error!("Failed to write storage file '{}': {}", path.display(), e);
            MetaphorError::storage_write(&path, e)
        })?;

        log::debug!("Stored {} bytes under '{key}'", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| MetaphorError::storage_write(&path, e))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}
