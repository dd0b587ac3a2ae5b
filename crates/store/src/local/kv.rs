//! Directory-backed key-value store for fallback mode.
//!
//! Each key maps to one JSON file (`<dir>/<key>.json`). Values are read
//! and written whole; writes go through a temp file and an atomic rename
//! so a crash never leaves a half-written collection behind. An in-memory
//! overlay avoids re-reading files on every access.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

/// Handle to a key-value directory. Cheap to clone; all clones share the
/// same overlay and lock.
#[derive(Debug, Clone)]
pub struct KvStore {
    inner: Arc<KvInner>,
}

#[derive(Debug)]
struct KvInner {
    dir: PathBuf,
    overlay: Mutex<HashMap<String, Value>>,
}

impl KvStore {
    /// Open (creating if needed) a key-value directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            inner: Arc::new(KvInner {
                dir,
                overlay: Mutex::new(HashMap::new()),
            }),
        })
    }

    /// Read and deserialize the value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on read failure and
    /// `StoreError::Serialization` if the stored JSON does not match `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let mut overlay = self.lock();

        if let Some(value) = overlay.get(key) {
            return Ok(Some(serde_json::from_value(value.clone())?));
        }

        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let parsed = serde_json::from_value(value.clone())?;
        overlay.insert(key.to_owned(), value);
        Ok(Some(parsed))
    }

    /// Serialize and persist `value` under `key`, replacing any previous
    /// value wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on write failure.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(value)?;
        let raw = serde_json::to_string_pretty(&json)?;

        let mut overlay = self.lock();
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        overlay.insert(key.to_owned(), json);
        Ok(())
    }

    /// Remove `key` and its file. Succeeds if the key was absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut overlay = self.lock();
        overlay.remove(key);
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Whether `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key) || self.path_for(key).exists()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.inner.dir.join(format!("{key}.json"))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.inner
            .overlay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        let value: Option<Vec<String>> = kv.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        kv.put("names", &vec!["a".to_owned(), "b".to_owned()]).unwrap();

        let names: Option<Vec<String>> = kv.get("names").unwrap();
        assert_eq!(names.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let kv = KvStore::open(dir.path()).unwrap();
            kv.put("count", &42_u32).unwrap();
        }
        let kv = KvStore::open(dir.path()).unwrap();
        let count: Option<u32> = kv.get("count").unwrap();
        assert_eq!(count, Some(42));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        kv.put("key", &1_u8).unwrap();
        kv.remove("key").unwrap();
        kv.remove("key").unwrap();
        assert!(!kv.contains("key"));
    }
}
