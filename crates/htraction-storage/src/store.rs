use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::StorageError;

/// A JSON object on disk mapping string keys to JSON values.
///
/// Every write reads the whole file, applies the change and replaces the
/// file through a temp file and rename. Concurrent writers do not
/// coordinate; the last rename wins.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Does not touch the filesystem. A missing file reads as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::open(dir.join(htraction_core::storage_keys::LOCAL_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(StorageError::NotAnObject(self.path.clone())),
        }
    }

    fn save(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        tracing::debug!(path = %self.path.display(), keys = map.len(), "local store written");
        Ok(())
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get_raw(key)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(StorageError::from)
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.save(&map)?;
        tracing::info!(key, "local store value set");
        Ok(())
    }

    /// Returns whether the key was present.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut map = self.load()?;
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&map)?;
        tracing::info!(key, "local store value removed");
        Ok(true)
    }

    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.load()?.keys().cloned().collect())
    }
}
