// SPDX-License-Identifier: MPL-2.0
//! Content documents read from a directory at runtime.

use crate::application::port::{LoadError, ResourceLoader};
use crate::domain::content::Locator;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads `<root>/<locator>` with non-blocking file I/O.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLoader for DirectoryLoader {
    async fn fetch(&self, locator: &Locator) -> Result<String, LoadError> {
        let path = self.root.join(locator.as_str());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => LoadError::NotFound(locator.to_string()),
                _ => LoadError::Io(format!("{}: {err}", path.display())),
            })
    }
}
