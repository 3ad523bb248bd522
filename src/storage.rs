//! Key-value persistence: the planner only ever reads and writes whole strings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Key under which the encoded roster is stored.
pub const PERSISTENCE_KEY: &str = "Database";

/// Value meaning "never persisted", as opposed to an empty roster (`""`).
pub const EMPTY_SENTINEL: &str = "---";

/// Errors from a [`KeyValueStore`] write.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(String),
    /// The backing file exists but is not a JSON object of strings.
    Format(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StoreError::Format(msg) => write!(f, "Storage file is malformed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// String get/set, the only thing the planner needs from the host.
pub trait KeyValueStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a single key.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by one JSON file holding an object of string values.
/// The whole file is rewritten on every `set_string`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, loading existing values. A missing file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<HashMap<String, String>>(&text)
                .map_err(|e| StoreError::Format(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No storage file at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&*values)
            .map_err(|e| StoreError::Format(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))
    }
}
