// SPDX-License-Identifier: MPL-2.0
//! `folio_store` holds the localized content of a single-page portfolio
//! site.
//!
//! It resolves which language variant of the content document is active,
//! loads it, falls back to the baseline document when a variant is missing
//! or broken, and persists the chosen language and a content snapshot
//! across sessions.

#![doc(html_root_url = "https://docs.rs/folio_store/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;

#[cfg(test)]
mod test_utils;
