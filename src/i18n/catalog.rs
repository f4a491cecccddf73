// SPDX-License-Identifier: MPL-2.0
//! The ordered, read-only list of supported languages.
//!
//! The catalog is loaded once at startup from `languages.json`, a JSON array
//! of `{ "code": ..., "label": ... }` objects, and never changes afterwards.

use crate::application::port::ResourceLoader;
use crate::domain::content::Locator;
use crate::domain::language::LanguageDescriptor;
use crate::error::Result;
use std::collections::HashSet;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Reasons a catalog document is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Not a JSON array of descriptors.
    Parse(String),
    /// The same code appears twice.
    DuplicateCode(String),
    /// Code is not a well-formed language tag.
    InvalidCode(String),
    /// Label is empty or whitespace, so no slug can be derived.
    BlankLabel(String),
    /// Label's slug would not stay a plain file name (path separators,
    /// `..`, control characters).
    UnsafeLabel(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid catalog document: {msg}"),
            CatalogError::DuplicateCode(code) => write!(f, "duplicate language code: {code}"),
            CatalogError::InvalidCode(code) => write!(f, "invalid language code: {code}"),
            CatalogError::BlankLabel(code) => write!(f, "blank label for language: {code}"),
            CatalogError::UnsafeLabel(code) => {
                write!(f, "label for language {code} is not usable as a file name")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LanguageCatalog {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageCatalog {
    /// Validates and wraps an ordered list of descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for duplicate codes, codes that do not
    /// parse as language identifiers, or blank labels.
    pub fn new(languages: Vec<LanguageDescriptor>) -> std::result::Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for language in &languages {
            if language.code.parse::<LanguageIdentifier>().is_err() {
                return Err(CatalogError::InvalidCode(language.code.clone()));
            }
            if language.label.trim().is_empty() {
                return Err(CatalogError::BlankLabel(language.code.clone()));
            }
            if !is_safe_slug(&language.slug()) {
                return Err(CatalogError::UnsafeLabel(language.code.clone()));
            }
            if !seen.insert(language.code.as_str()) {
                return Err(CatalogError::DuplicateCode(language.code.clone()));
            }
        }
        Ok(Self { languages })
    }

    /// Parses the catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON, otherwise whatever
    /// [`LanguageCatalog::new`] rejects.
    pub fn from_json(text: &str) -> std::result::Result<Self, CatalogError> {
        let languages: Vec<LanguageDescriptor> =
            serde_json::from_str(text).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(languages)
    }

    /// Fetches and parses `languages.json` through `loader`.
    ///
    /// # Errors
    ///
    /// Fails if the catalog resource cannot be fetched or is invalid.
    pub async fn load<L: ResourceLoader>(loader: &L) -> Result<Self> {
        let text = loader.fetch(&Locator::catalog()).await?;
        let catalog = Self::from_json(&text)?;
        log::debug!("event=catalog_loaded languages={}", catalog.len());
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|language| language.code == code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|language| language.code.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// A slug must stay a single file name under the content root.
fn is_safe_slug(slug: &str) -> bool {
    !slug.contains("..") && !slug.chars().any(|c| matches!(c, '/' | '\\') || c.is_control())
}
