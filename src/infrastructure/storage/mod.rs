// SPDX-License-Identifier: MPL-2.0
//! Storage adapters implementing [`KeyValueStorage`].

mod file;
mod memory;

pub use file::{FileStorage, STATE_FILE};
pub use memory::MemoryStorage;

use crate::application::port::{KeyValueStorage, StorageError};

/// Storage chosen at startup: the state file when a data directory is
/// available, otherwise memory for the session only.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    File(FileStorage),
    Memory(MemoryStorage),
}

impl KeyValueStorage for StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            StorageBackend::File(storage) => storage.get(key),
            StorageBackend::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            StorageBackend::File(storage) => storage.set(key, value),
            StorageBackend::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            StorageBackend::File(storage) => storage.remove(key),
            StorageBackend::Memory(storage) => storage.remove(key),
        }
    }
}
