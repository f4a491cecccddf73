// SPDX-License-Identifier: MPL-2.0
//! Key-value storage port definition.
//!
//! The [`KeyValueStorage`] trait abstracts the durable medium that holds the
//! language preference and the content snapshot. Callers are expected to
//! treat every error as "nothing stored"; see
//! [`PersistenceLayer`](crate::application::persistence::PersistenceLayer).

use std::fmt;

// =============================================================================
// StorageError
// =============================================================================

/// Errors reported by a storage medium.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The medium cannot be reached at all.
    Unavailable(String),

    /// The write would exceed the medium's capacity.
    QuotaExceeded,

    /// The medium refused the write.
    WriteRejected(String),

    /// Stored bytes could not be decoded.
    Corrupted(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::QuotaExceeded => write!(f, "Storage quota exceeded"),
            StorageError::WriteRejected(msg) => write!(f, "Write rejected: {msg}"),
            StorageError::Corrupted(msg) => write!(f, "Stored data corrupted: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// KeyValueStorage Trait
// =============================================================================

/// Port for a string key-value store.
///
/// Methods take `&self`; implementations use interior mutability so several
/// owners can share one medium.
pub trait KeyValueStorage {
    /// Reads a value. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium is unreachable or corrupted.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write cannot be completed.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium is unreachable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display() {
        assert_eq!(
            format!("{}", StorageError::QuotaExceeded),
            "Storage quota exceeded"
        );
        let err = StorageError::Unavailable("private mode".to_string());
        assert!(format!("{err}").contains("private mode"));
    }
}
