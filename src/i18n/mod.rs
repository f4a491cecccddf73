// SPDX-License-Identifier: MPL-2.0
//! Language catalog and code resolution.
//!
//! # Features
//!
//! - Catalog of supported languages loaded once at startup
//! - Validation of codes as BCP 47 language identifiers
//! - Startup-built registry mapping each code to its content locator
//! - Baseline code that always resolves, whatever the catalog says

pub mod catalog;
pub mod resolver;

pub use catalog::{CatalogError, LanguageCatalog};
pub use resolver::LanguageResolver;
