// SPDX-License-Identifier: MPL-2.0
//! In-process key-value storage.
//!
//! Clones share the same map, so a store and a test (or two store
//! instances) can observe one medium. Failure switches emulate a browser-like
//! medium that is unavailable, full, or refusing writes.

use crate::application::port::{KeyValueStorage, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    writes: HashMap<String, usize>,
    unavailable: bool,
    reject_writes: bool,
    quota: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When `false`, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.inner.borrow_mut().unavailable = !available;
    }

    /// When `true`, writes fail with [`StorageError::WriteRejected`].
    pub fn set_reject_writes(&self, reject: bool) {
        self.inner.borrow_mut().reject_writes = reject;
    }

    /// Maximum size in bytes of a single value.
    pub fn set_quota(&self, quota: Option<usize>) {
        self.inner.borrow_mut().quota = quota;
    }

    /// Number of successful writes to `key` so far.
    #[must_use]
    pub fn write_count(&self, key: &str) -> usize {
        self.inner.borrow().writes.get(key).copied().unwrap_or(0)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(StorageError::Unavailable("memory storage disabled".into()));
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable("memory storage disabled".into()));
        }
        if inner.reject_writes {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        if inner.quota.is_some_and(|quota| value.len() > quota) {
            return Err(StorageError::QuotaExceeded);
        }
        inner.entries.insert(key.to_string(), value.to_string());
        *inner.writes.entry(key.to_string()).or_default() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable("memory storage disabled".into()));
        }
        inner.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", "v").expect("write");
        assert_eq!(other.get("k"), Ok(Some("v".to_string())));
    }

    #[test]
    fn write_count_tracks_successful_writes_only() {
        let storage = MemoryStorage::new();
        storage.set("k", "1").expect("write");
        storage.set_reject_writes(true);
        assert!(storage.set("k", "2").is_err());
        assert_eq!(storage.write_count("k"), 1);
        assert_eq!(storage.get("k"), Ok(Some("1".to_string())));
    }

    #[test]
    fn quota_rejects_large_values() {
        let storage = MemoryStorage::new();
        storage.set_quota(Some(3));
        assert_eq!(storage.set("k", "four"), Err(StorageError::QuotaExceeded));
        assert!(storage.set("k", "ok").is_ok());
    }

    #[test]
    fn remove_missing_key_is_fine() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }
}
