// SPDX-License-Identifier: MPL-2.0
//! Resource locators and the content naming convention.
//!
//! Locators are only ever built from the catalog at startup (see
//! [`LanguageResolver`](crate::i18n::resolver::LanguageResolver)); loaders
//! treat them as opaque names relative to their content root.

use crate::domain::language::LanguageDescriptor;
use std::fmt;

/// Baseline document, always present.
pub const BASELINE_RESOURCE: &str = "data.json";

/// Catalog document listing `{code, label}` pairs.
pub const CATALOG_RESOURCE: &str = "languages.json";

/// Prefix of per-language documents.
pub const RESOURCE_PREFIX: &str = "data-";

/// Suffix of per-language documents.
pub const RESOURCE_SUFFIX: &str = ".json";

/// Opaque identifier of a content document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Locator of the baseline document.
    #[must_use]
    pub fn baseline() -> Self {
        Self(BASELINE_RESOURCE.to_string())
    }

    /// Locator of the catalog document.
    #[must_use]
    pub fn catalog() -> Self {
        Self(CATALOG_RESOURCE.to_string())
    }

    /// Builds `data-<slug>.json` for a catalog entry.
    #[must_use]
    pub fn for_language(descriptor: &LanguageDescriptor) -> Self {
        Self(format!(
            "{RESOURCE_PREFIX}{}{RESOURCE_SUFFIX}",
            descriptor.slug()
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
