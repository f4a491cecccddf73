// SPDX-License-Identifier: MPL-2.0
//! A single catalog entry.

use serde::{Deserialize, Serialize};

/// A supported language: its code and human-readable label.
///
/// Codes are unique within a catalog; labels feed the resource slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub code: String,
    pub label: String,
}

impl LanguageDescriptor {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Resource slug derived from the label.
    #[must_use]
    pub fn slug(&self) -> String {
        derive_slug(&self.label)
    }
}

/// Lower-cases `label` and replaces each whitespace run with one hyphen.
///
/// Leading and trailing whitespace is dropped, so `" Old  English "`
/// becomes `"old-english"`.
#[must_use]
pub fn derive_slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_single_word() {
        assert_eq!(derive_slug("English"), "english");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(derive_slug("Brazilian \t Portuguese"), "brazilian-portuguese");
    }

    #[test]
    fn slug_trims_outer_whitespace() {
        assert_eq!(derive_slug("  Old English "), "old-english");
    }

    #[test]
    fn slug_keeps_non_ascii_letters() {
        assert_eq!(derive_slug("Français Canadien"), "français-canadien");
    }

    #[test]
    fn descriptor_slug_uses_label_not_code() {
        let descriptor = LanguageDescriptor::new("fr", "French");
        assert_eq!(descriptor.slug(), "french");
    }
}
