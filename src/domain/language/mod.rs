// SPDX-License-Identifier: MPL-2.0
//! Language descriptors.

mod descriptor;

pub use descriptor::{derive_slug, LanguageDescriptor};
