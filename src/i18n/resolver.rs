// SPDX-License-Identifier: MPL-2.0
//! Maps language codes to content locators.
//!
//! The registry is built once from the catalog, so no locator is ever
//! assembled from a label at load time. Resolution is pure: it never does
//! I/O and never decides on fallback, that is the store's job.

use super::catalog::LanguageCatalog;
use crate::domain::content::Locator;
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LanguageResolver {
    baseline_code: String,
    baseline_locator: Locator,
    registry: HashMap<String, Locator>,
}

impl LanguageResolver {
    /// Builds the `code -> locator` registry for every catalog entry.
    pub fn new(catalog: &LanguageCatalog, baseline_code: impl Into<String>) -> Self {
        let registry = catalog
            .iter()
            .map(|language| (language.code.clone(), Locator::for_language(language)))
            .collect();

        Self {
            baseline_code: baseline_code.into(),
            baseline_locator: Locator::baseline(),
            registry,
        }
    }

    /// Resolves `code` to the locator of its document.
    ///
    /// The baseline code always maps to the baseline locator, whether or not
    /// it is listed in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] when `code` is neither the baseline
    /// nor an exact catalog match.
    pub fn resolve(&self, code: &str) -> Result<&Locator> {
        if code == self.baseline_code {
            return Ok(&self.baseline_locator);
        }
        self.registry
            .get(code)
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    #[must_use]
    pub fn baseline_code(&self) -> &str {
        &self.baseline_code
    }

    #[must_use]
    pub fn baseline_locator(&self) -> &Locator {
        &self.baseline_locator
    }

    /// True for the baseline code and every catalog code.
    #[must_use]
    pub fn is_known(&self, code: &str) -> bool {
        code == self.baseline_code || self.registry.contains_key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::LanguageDescriptor;

    fn resolver() -> LanguageResolver {
        let catalog = LanguageCatalog::new(vec![
            LanguageDescriptor::new("en", "English"),
            LanguageDescriptor::new("fr", "French"),
            LanguageDescriptor::new("pt-BR", "Brazilian Portuguese"),
        ])
        .expect("valid catalog");
        LanguageResolver::new(&catalog, "en")
    }

    #[test]
    fn baseline_code_resolves_to_baseline_locator() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("en"), Ok(&Locator::baseline()));
    }

    #[test]
    fn baseline_resolves_even_when_missing_from_catalog() {
        let resolver = LanguageResolver::new(&LanguageCatalog::default(), "en");
        assert_eq!(resolver.resolve("en"), Ok(&Locator::baseline()));
    }

    #[test]
    fn catalog_code_resolves_to_slugged_locator() {
        let resolver = resolver();
        let locator = resolver.resolve("pt-BR").expect("known code");
        assert_eq!(locator.as_str(), "data-brazilian-portuguese.json");
    }

    #[test]
    fn unknown_code_fails() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("xx-unknown"),
            Err(Error::UnknownLanguage("xx-unknown".into()))
        );
    }

    #[test]
    fn is_known_covers_catalog_and_baseline() {
        let resolver = resolver();
        assert!(resolver.is_known("fr"));
        assert!(resolver.is_known("en"));
        assert!(!resolver.is_known("de"));
    }
}
