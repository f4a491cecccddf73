// SPDX-License-Identifier: MPL-2.0
//! Best-effort persistence of the language preference and content snapshot.
//!
//! Two keys live in the storage medium:
//! - [`PREFERENCE_KEY`]: the active language code
//! - [`SNAPSHOT_KEY`]: the full content document as JSON
//!
//! The `try_*` methods report every failure. The plain methods are what the
//! store uses: they log and swallow unavailability, quota errors and corrupt
//! data, treating all of them as "nothing stored".

use super::port::KeyValueStorage;
use crate::domain::content::ContentDocument;
use crate::error::{Error, Result};

/// Storage key holding the active language code.
pub const PREFERENCE_KEY: &str = "portfolioLanguage";

/// Storage key holding the serialized content snapshot.
pub const SNAPSHOT_KEY: &str = "portfolioData";

#[derive(Debug, Clone)]
pub struct PersistenceLayer<S> {
    storage: S,
}

impl<S: KeyValueStorage> PersistenceLayer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Language preference
    // =========================================================================

    /// Reads the stored language code. Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] or [`Error::StorageCorruption`] when the
    /// medium cannot be read.
    pub fn try_get_preference(&self) -> Result<Option<String>> {
        let value = self.storage.get(PREFERENCE_KEY)?;
        Ok(value
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty()))
    }

    /// Stores the language code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] when the medium rejects the write.
    pub fn try_set_preference(&self, code: &str) -> Result<()> {
        self.storage.set(PREFERENCE_KEY, code)?;
        Ok(())
    }

    /// Stored language code, or `None` if absent or unreadable.
    #[must_use]
    pub fn get_preference(&self) -> Option<String> {
        self.try_get_preference().unwrap_or_else(|err| {
            log::warn!("event=preference_read status=ignored error=\"{err}\"");
            None
        })
    }

    /// Stores the language code, returning whether the write succeeded.
    pub fn set_preference(&self, code: &str) -> bool {
        match self.try_set_preference(code) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("event=preference_write status=ignored code={code} error=\"{err}\"");
                false
            }
        }
    }

    // =========================================================================
    // Content snapshot
    // =========================================================================

    /// Reads and parses the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageCorruption`] when the stored text is not a
    /// content document, and [`Error::Persistence`] when the medium cannot be
    /// read.
    pub fn try_get_snapshot(&self) -> Result<Option<ContentDocument>> {
        let Some(text) = self.storage.get(SNAPSHOT_KEY)? else {
            return Ok(None);
        };
        ContentDocument::from_json(&text)
            .map(Some)
            .map_err(|err| Error::StorageCorruption(err.to_string()))
    }

    /// Serializes and stores the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] when the medium rejects the write.
    pub fn try_set_snapshot(&self, document: &ContentDocument) -> Result<()> {
        let text = document
            .to_json()
            .map_err(|err| Error::StorageCorruption(err.to_string()))?;
        self.storage.set(SNAPSHOT_KEY, &text)?;
        Ok(())
    }

    /// Stored snapshot, or `None` if absent, unreadable or corrupt.
    #[must_use]
    pub fn get_snapshot(&self) -> Option<ContentDocument> {
        self.try_get_snapshot().unwrap_or_else(|err| {
            log::warn!("event=snapshot_read status=discarded error=\"{err}\"");
            None
        })
    }

    /// Stores the snapshot, returning whether the write succeeded.
    pub fn set_snapshot(&self, document: &ContentDocument) -> bool {
        match self.try_set_snapshot(document) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("event=snapshot_write status=ignored error=\"{err}\"");
                false
            }
        }
    }
}
