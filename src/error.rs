// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{LoadError, StorageError};
use crate::i18n::catalog::CatalogError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    /// Requested language code is not in the catalog.
    UnknownLanguage(String),
    ResourceLoad(LoadError),
    Persistence(StorageError),
    /// Stored snapshot exists but is not a well-formed content document.
    StorageCorruption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::UnknownLanguage(code) => write!(f, "Unknown language: {}", code),
            Error::ResourceLoad(e) => write!(f, "Resource Load Error: {}", e),
            Error::Persistence(e) => write!(f, "Persistence Error: {}", e),
            Error::StorageCorruption(e) => write!(f, "Storage Corruption: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::ResourceLoad(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupted(message) => Error::StorageCorruption(message),
            other => Error::Persistence(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
