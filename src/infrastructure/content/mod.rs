// SPDX-License-Identifier: MPL-2.0
//! Content loaders implementing [`ResourceLoader`].

mod directory;
mod embedded;

pub use directory::DirectoryLoader;
pub use embedded::EmbeddedLoader;

use crate::application::port::{LoadError, ResourceLoader};
use crate::domain::content::Locator;

/// Loader chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Embedded(EmbeddedLoader),
    Directory(DirectoryLoader),
}

impl ResourceLoader for ContentSource {
    async fn fetch(&self, locator: &Locator) -> Result<String, LoadError> {
        match self {
            ContentSource::Embedded(loader) => loader.fetch(locator).await,
            ContentSource::Directory(loader) => loader.fetch(locator).await,
        }
    }
}
