//! Key-value persistence for arcade save data.
//!
//! Every record is a JSON blob stored under a string key. Two media are
//! provided: [`FileStore`] (one `<key>.json` file per key, the default for the
//! binary) and [`MemoryStore`] (tests and hosts without a filesystem).
//!
//! Game-facing code never sees a [`StoreError`]: [`read_json`] treats missing,
//! unreadable or malformed data as "no data", and [`write_json`] turns failed
//! writes into logged no-ops.

use crate::errors::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default byte quota shared by all keys (the usual browser localStorage limit).
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// A synchronous, unbuffered string key-value store.
pub trait StorageMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// File-backed medium
// =============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    quota_bytes: usize,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>, quota_bytes: usize) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, quota_bytes })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Bytes used by every stored key except `skip`.
    fn used_bytes_excluding(&self, skip: &Path) -> io::Result<usize> {
        let mut total = 0usize;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            total += fs::metadata(&path)?.len() as usize;
        }
        Ok(total)
    }
}

impl StorageMedium for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let needed = self.used_bytes_excluding(&path)? + value.len();
        if needed > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                needed,
                limit: self.quota_bytes,
            });
        }
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// In-memory medium
// =============================================================================

/// `HashMap`-backed medium. Can be switched into failure modes to model
/// disabled storage or a full quota.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota_bytes: usize,
    available: bool,
    fail_writes: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
            available: true,
            fail_writes: false,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A medium where every call fails with [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    /// Reads keep working, writes fail with [`StoreError::Unavailable`].
    pub fn with_fail_writes(mut self, fail_writes: bool) -> Self {
        self.fail_writes = fail_writes;
        self
    }

    /// Raw access for tests that tamper with stored blobs.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_bytes_excluding(&self, skip: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != skip)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl StorageMedium for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available || self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        let needed = self.used_bytes_excluding(key) + value.len();
        if needed > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                needed,
                limit: self.quota_bytes,
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.available || self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON helpers
// =============================================================================

/// Read and decode a JSON value. Missing keys, storage failures and malformed
/// JSON all yield `None`.
pub fn read_json<T, M>(medium: &M, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    M: StorageMedium + ?Sized,
{
    let raw = match medium.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("reading '{key}' failed: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding malformed data under '{key}': {e}");
            None
        }
    }
}

/// Like [`read_json`], falling back to `T::default()`.
pub fn read_json_or_default<T, M>(medium: &M, key: &str) -> T
where
    T: Default + DeserializeOwned,
    M: StorageMedium + ?Sized,
{
    read_json(medium, key).unwrap_or_default()
}

/// Encode and write a JSON value. Returns whether the write landed.
pub fn write_json<T, M>(medium: &mut M, key: &str, data: &T) -> bool
where
    T: Serialize + ?Sized,
    M: StorageMedium + ?Sized,
{
    let result = serde_json::to_string(data)
        .map_err(StoreError::from)
        .and_then(|json| medium.set(key, &json));
    match result {
        Ok(()) => {
            log::debug!("persisted '{key}'");
            true
        }
        Err(e) => {
            log::warn!("writing '{key}' failed: {e}");
            false
        }
    }
}

/// Remove a key, ignoring failures.
pub fn remove_key<M: StorageMedium + ?Sized>(medium: &mut M, key: &str) {
    if let Err(e) = medium.remove(key) {
        log::warn!("removing '{key}' failed: {e}");
    }
}

#[cfg(test)]
pub(crate) fn test_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "neon-arcade-test-{}-{}",
        std::process::id(),
        test_id
    ))
}
