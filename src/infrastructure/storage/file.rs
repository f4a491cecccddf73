// SPDX-License-Identifier: MPL-2.0
//! Key-value storage in a single CBOR file.
//!
//! The whole map is stored as `state.cbor` in the application data
//! directory and rewritten on every `set` with blocking `std::fs` calls.
//! Values are small (one language code and one content snapshot).
//!
//! # Path Resolution
//!
//! 1. Use [`FileStorage::new`] with an explicit directory
//! 2. Set `FOLIO_STORE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::application::port::{KeyValueStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let mut path = base_dir.into();
        path.push(STATE_FILE);
        Self { path }
    }

    /// Storage in the resolved data directory, see [`paths::get_app_data_dir_with_override`].
    ///
    /// Returns `None` if no data directory can be determined.
    #[must_use]
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(StorageError::Unavailable(err.to_string())),
        };
        ciborium::from_reader(BufReader::new(file))
            .map_err(|err| StorageError::Corrupted(err.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::Unavailable(err.to_string()))?;
        }
        let file = fs::File::create(&self.path).map_err(map_write_error)?;
        let mut writer = BufWriter::new(file);
        ciborium::into_writer(entries, &mut writer).map_err(|err| match err {
            ciborium::ser::Error::Io(io) => map_write_error(io),
            other => StorageError::WriteRejected(other.to_string()),
        })?;
        writer.flush().map_err(map_write_error)
    }

    /// Entries to start a write from. A corrupt file is replaced rather than
    /// blocking every later write.
    fn entries_for_write(&self) -> Result<Entries, StorageError> {
        match self.read_entries() {
            Err(StorageError::Corrupted(message)) => {
                log::warn!(
                    "event=state_file_reset path={} error=\"{message}\"",
                    self.path.display()
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }
}

fn map_write_error(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::StorageFull => StorageError::QuotaExceeded,
        _ => StorageError::WriteRejected(err.to_string()),
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get("portfolioLanguage"), Ok(None));
    }

    #[test]
    fn set_then_get_from_fresh_instance() {
        let temp_dir = tempdir().expect("create temp dir");
        FileStorage::new(temp_dir.path())
            .set("portfolioLanguage", "fr")
            .expect("write");

        let reopened = FileStorage::new(temp_dir.path());
        assert_eq!(reopened.get("portfolioLanguage"), Ok(Some("fr".to_string())));
    }

    #[test]
    fn keys_are_independent() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path());
        storage.set("a", "1").expect("write a");
        storage.set("b", "2").expect("write b");
        storage.remove("a").expect("remove a");

        assert_eq!(storage.get("a"), Ok(None));
        assert_eq!(storage.get("b"), Ok(Some("2".to_string())));
    }

    #[test]
    fn corrupted_file_is_reported_on_read() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let storage = FileStorage::new(temp_dir.path());
        assert!(matches!(storage.get("a"), Err(StorageError::Corrupted(_))));
    }

    #[test]
    fn corrupted_file_is_replaced_on_write() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let storage = FileStorage::new(temp_dir.path());
        storage.set("a", "1").expect("write");
        assert_eq!(storage.get("a"), Ok(Some("1".to_string())));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        FileStorage::new(&nested_dir).set("a", "1").expect("write");
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn override_directory_is_used() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::open_with_override(Some(temp_dir.path().to_path_buf()))
            .expect("override always resolves");
        assert_eq!(storage.path(), temp_dir.path().join(STATE_FILE));
    }
}
