// SPDX-License-Identifier: MPL-2.0
//! The content document served to the site.
//!
//! A document is a JSON object whose top-level keys are sections
//! (`personal`, `section_titles`, `summary`, `skills`, `experience`,
//! `education`, `ui`, ...). The store never looks inside a section; it only
//! replaces or merges them as whole values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Section Names
// =============================================================================

/// Well-known section keys.
pub mod sections {
    pub const PERSONAL: &str = "personal";
    pub const SECTION_TITLES: &str = "section_titles";
    pub const SUMMARY: &str = "summary";
    pub const SKILLS: &str = "skills";
    pub const EXPERIENCE: &str = "experience";
    pub const EDUCATION: &str = "education";
    pub const UI: &str = "ui";
}

// =============================================================================
// ContentDocument
// =============================================================================

/// Keyed, mergeable content document.
///
/// Serializes as the bare JSON object so persisted snapshots and resource
/// files share one format. Deserializing anything but an object fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(Map<String, Value>);

impl ContentDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, returning `None` if it is not an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `text` is not valid JSON or its root is
    /// not an object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serializes the document to compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; this only happens for non-string map
    /// keys, which a `ContentDocument` cannot contain.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Returns a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Replaces one top-level section, returning the previous value.
    pub fn set_section(&mut self, name: impl Into<String>, data: Value) -> Option<Value> {
        self.0.insert(name.into(), data)
    }

    /// Shallow merge: every top-level key of `other` overwrites the key of
    /// the same name in `self`. Keys absent from `other` are kept.
    pub fn merge(&mut self, other: ContentDocument) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Iterates over section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    // -------------------------------------------------------------------------
    // Section accessors
    // -------------------------------------------------------------------------

    /// Name, contact details and location.
    #[must_use]
    pub fn personal(&self) -> Option<&Value> {
        self.section(sections::PERSONAL)
    }

    /// Headings used for site sections and navigation labels.
    #[must_use]
    pub fn section_titles(&self) -> Option<&Value> {
        self.section(sections::SECTION_TITLES)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&Value> {
        self.section(sections::SUMMARY)
    }

    #[must_use]
    pub fn skills(&self) -> Option<&Value> {
        self.section(sections::SKILLS)
    }

    #[must_use]
    pub fn experience(&self) -> Option<&Value> {
        self.section(sections::EXPERIENCE)
    }

    #[must_use]
    pub fn education(&self) -> Option<&Value> {
        self.section(sections::EDUCATION)
    }

    /// UI copy. Missing `ui` yields an empty object so callers can look up
    /// strings without special-casing old documents.
    #[must_use]
    pub fn ui(&self) -> Value {
        self.section(sections::UI)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

impl From<Map<String, Value>> for ContentDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
