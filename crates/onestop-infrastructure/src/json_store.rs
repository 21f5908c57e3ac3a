//! JSON key-value store with atomic writes.
//!
//! The browser original kept everything in origin-scoped local storage; this
//! is the same contract over one directory: each key is a `<key>.json` file
//! holding one JSON value, durable across restarts.
//!
//! Reads fail closed: a file that exists but does not parse is reported as
//! absent and logged, never propagated as an error. Writes are atomic
//! (tmp file + fsync + rename) under an exclusive file lock.

use onestop_core::error::{OneStopError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::paths::OneStopPaths;

/// A directory-backed key-value store of JSON values.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a store over the given directory. The directory is created
    /// lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store at the default platform location.
    pub fn open_default() -> Result<Self> {
        let dir = OneStopPaths::store_dir().map_err(|e| OneStopError::config(e.to_string()))?;
        Ok(Self::new(dir))
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads the raw JSON value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent, the file is empty, or the
    /// stored text is not valid JSON (logged at `warn`).
    pub fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is not valid JSON, treating as absent");
                Ok(None)
            }
        }
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// A value that parses as JSON but not as `T` also reads as absent; the
    /// store never crashes on malformed persisted data.
    pub fn read_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.read(key)? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(typed) => Ok(Some(typed)),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value has unexpected shape, treating as absent");
                Ok(None)
            }
        }
    }

    /// Serializes `value` and writes it under `key`, replacing any previous
    /// value. The write is atomic: tmp file in the same directory, fsync,
    /// then rename.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let _lock = FileLock::acquire(&self.key_path(key))?;

        let json = serde_json::to_string_pretty(value)?;
        let path = self.key_path(key);
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;
        tracing::debug!(key, "persisted");
        Ok(())
    }

    /// Removes the value stored under `key`. Deleting an absent key is Ok.
    pub fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given path.
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| OneStopError::data_access(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // No file locking on non-Unix; acceptable for a single-user
            // local store.
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        // Remove the lock file (best effort).
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRecord {
        name: String,
        count: u32,
    }

    fn store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, store) = store();
        let record = TestRecord {
            name: "test".to_string(),
            count: 42,
        };

        store.write("record", &record).unwrap();
        let loaded: TestRecord = store.read_as("record").unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_read_missing_key() {
        let (_dir, store) = store();
        assert!(store.read("nothing").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let (dir, store) = store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("broken.json"), "{not json at all").unwrap();

        assert!(store.read("broken").unwrap().is_none());
        assert!(store.read_as::<TestRecord>("broken").unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_reads_as_absent() {
        let (_dir, store) = store();
        store.write("record", &serde_json::json!({"name": 7})).unwrap();
        assert!(store.read_as::<TestRecord>("record").unwrap().is_none());
        // The raw value is still readable.
        assert!(store.read("record").unwrap().is_some());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, store) = store();
        store
            .write(
                "record",
                &TestRecord {
                    name: "x".to_string(),
                    count: 1,
                },
            )
            .unwrap();
        store.delete("record").unwrap();
        assert!(store.read("record").unwrap().is_none());
        // Deleting again is fine.
        store.delete("record").unwrap();
    }

    #[test]
    fn test_write_leaves_no_tmp_file() {
        let (dir, store) = store();
        store
            .write(
                "record",
                &TestRecord {
                    name: "x".to_string(),
                    count: 1,
                },
            )
            .unwrap();
        assert!(!dir.path().join(".record.json.tmp").exists());
        assert!(dir.path().join("record.json").exists());
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let (_dir, store) = store();
        let first = TestRecord {
            name: "first".to_string(),
            count: 1,
        };
        let second = TestRecord {
            name: "second".to_string(),
            count: 2,
        };
        store.write("record", &first).unwrap();
        store.write("record", &second).unwrap();
        let loaded: TestRecord = store.read_as("record").unwrap().unwrap();
        assert_eq!(loaded, second);
    }
}
