//! Progress module - remembers which level the player is on
//!
//! A single integer is kept under [`CURRENT_LEVEL_KEY`] in a string
//! key-value store. Reading falls back to level 0 whenever the key is
//! missing or its value is not a non-negative integer.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Key the current level index is stored under
pub const CURRENT_LEVEL_KEY: &str = "loopy@current-level";

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and for running without a save file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk
///
/// The file is read once on open and rewritten in full on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Reads and writes the current level index
pub struct Progress;

impl Progress {
    /// Current level index, or 0 if absent or unparsable
    pub fn load(store: &impl KeyValueStore) -> usize {
        match store.get(CURRENT_LEVEL_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unparsable saved level");
                0
            }),
            None => 0,
        }
    }

    pub fn save(store: &mut impl KeyValueStore, level: usize) -> Result<(), StoreError> {
        store.set(CURRENT_LEVEL_KEY, &level.to_string())?;
        tracing::info!(level, "saved progress");
        Ok(())
    }
}
