// SPDX-License-Identifier: MPL-2.0
//! Content loading port definition.
//!
//! This module defines the [`ResourceLoader`] trait for fetching content
//! documents by [`Locator`]. Infrastructure adapters implement
//! [`fetch`](ResourceLoader::fetch); parsing is shared by the provided
//! [`load`](ResourceLoader::load).

use crate::domain::content::{ContentDocument, Locator};
use std::fmt;
use std::future::Future;

// =============================================================================
// LoadError
// =============================================================================

/// Errors that can occur while loading a content resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// No resource exists for the locator.
    NotFound(String),

    /// The resource exists but could not be read.
    Io(String),

    /// The resource was read but is not a content document.
    Parse {
        /// Locator of the offending resource.
        locator: String,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(locator) => write!(f, "Resource not found: {locator}"),
            LoadError::Io(msg) => write!(f, "I/O error: {msg}"),
            LoadError::Parse { locator, message } => {
                write!(f, "Invalid content in {locator}: {message}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

// =============================================================================
// ResourceLoader Trait
// =============================================================================

/// Port for fetching content documents.
///
/// Every failure comes back as a [`LoadError`]; implementations never panic
/// on missing or malformed resources. There are no retries at this layer.
///
/// # Concurrency
///
/// The returned futures are not required to be `Send`. The store runs on a
/// single-threaded executor and interleaves loads only at `.await` points.
///
/// # Example
///
/// ```ignore
/// use folio_store::application::port::ResourceLoader;
/// use folio_store::domain::content::Locator;
///
/// async fn print_name(loader: &impl ResourceLoader) {
///     match loader.load(&Locator::baseline()).await {
///         Ok(doc) => println!("{:?}", doc.personal()),
///         Err(e) => eprintln!("Failed to load: {e}"),
///     }
/// }
/// ```
pub trait ResourceLoader {
    /// Fetches the raw text of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] or [`LoadError::Io`].
    fn fetch(&self, locator: &Locator) -> impl Future<Output = Result<String, LoadError>>;

    /// Fetches and parses a content document.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or [`LoadError::Parse`] when the text is not
    /// a JSON object.
    fn load(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<ContentDocument, LoadError>> {
        async move {
            let text = self.fetch(locator).await?;
            ContentDocument::from_json(&text).map_err(|err| LoadError::Parse {
                locator: locator.to_string(),
                message: err.to_string(),
            })
        }
    }
}
