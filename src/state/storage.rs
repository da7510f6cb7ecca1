//! Persisted preference storage
//!
//! The visitor's chosen language survives between sessions in a small
//! key-value store owned by the host application. The locale engine only
//! performs whole-value reads and single-key writes against it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::StorageConfig;
use crate::utils::errors::{LocaleError, Result};

/// Synchronous key-value store for visitor preferences
pub trait PreferenceStore {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference store backed by a JSON object file
///
/// Every write replaces the whole file through a sibling temp file and a
/// rename, so an interrupted write leaves the previous contents intact. A
/// missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the preference file used while writing
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn load_all(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Preference file does not exist yet");
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            LocaleError::Storage(format!(
                "Preference file {} is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_all()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // temp file then rename
        let temp = self.temp_path();
        fs::write(&temp, serde_json::to_string_pretty(&values)?)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), key = key, "Preference written");
        Ok(())
    }
}

/// Preference store selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredPreferenceStore {
    Memory(MemoryPreferenceStore),
    File(FilePreferenceStore),
}

impl ConfiguredPreferenceStore {
    /// File-backed when `preference_file` is set, in-memory otherwise
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.preference_file {
            Some(ref path) => ConfiguredPreferenceStore::File(FilePreferenceStore::new(path)),
            None => ConfiguredPreferenceStore::Memory(MemoryPreferenceStore::new()),
        }
    }
}

impl PreferenceStore for ConfiguredPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match self {
            ConfiguredPreferenceStore::Memory(store) => store.read(key),
            ConfiguredPreferenceStore::File(store) => store.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            ConfiguredPreferenceStore::Memory(store) => store.write(key, value),
            ConfiguredPreferenceStore::File(store) => store.write(key, value),
        }
    }
}
