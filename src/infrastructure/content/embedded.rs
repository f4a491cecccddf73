// SPDX-License-Identifier: MPL-2.0
//! Content documents compiled into the binary.

use crate::application::port::{LoadError, ResourceLoader};
use crate::domain::content::Locator;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAssets;

/// Serves the documents under `assets/content/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    /// Names of every embedded resource.
    pub fn resources() -> impl Iterator<Item = String> {
        ContentAssets::iter().map(|name| name.into_owned())
    }
}

impl ResourceLoader for EmbeddedLoader {
    async fn fetch(&self, locator: &Locator) -> Result<String, LoadError> {
        let file = ContentAssets::get(locator.as_str())
            .ok_or_else(|| LoadError::NotFound(locator.to_string()))?;
        String::from_utf8(file.data.into_owned())
            .map_err(|err| LoadError::Io(format!("{locator}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageCatalog;

    #[test]
    fn baseline_and_catalog_are_embedded() {
        let names: Vec<String> = EmbeddedLoader::resources().collect();
        assert!(names.iter().any(|n| n == "data.json"));
        assert!(names.iter().any(|n| n == "languages.json"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn embedded_baseline_is_a_document() {
        let doc = EmbeddedLoader
            .load(&Locator::baseline())
            .await
            .expect("baseline must load");
        assert!(doc.personal().is_some());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn embedded_catalog_is_valid() {
        let catalog = LanguageCatalog::load(&EmbeddedLoader)
            .await
            .expect("catalog must load");
        assert!(catalog.contains("fr"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_resource_is_not_found() {
        let locator = Locator::for_language(&crate::domain::language::LanguageDescriptor::new(
            "de", "German",
        ));
        let err = EmbeddedLoader.fetch(&locator).await.expect_err("no german file");
        assert_eq!(err, LoadError::NotFound("data-german.json".to_string()));
    }
}
