// SPDX-License-Identifier: MPL-2.0
//! Domain layer - content and language types.
//!
//! # Modules
//!
//! - [`content`]: [`ContentDocument`](content::ContentDocument) and
//!   [`Locator`](content::Locator) with the resource naming convention
//! - [`language`]: [`LanguageDescriptor`](language::LanguageDescriptor) and
//!   slug derivation

pub mod content;
pub mod language;
