// SPDX-License-Identifier: MPL-2.0
//! Content document types and resource locators.

mod document;
mod locator;

pub use document::{sections, ContentDocument};
pub use locator::{
    Locator, BASELINE_RESOURCE, CATALOG_RESOURCE, RESOURCE_PREFIX, RESOURCE_SUFFIX,
};
