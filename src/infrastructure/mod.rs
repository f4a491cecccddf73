// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`content`]: Content loading from embedded assets or a directory
//!   (implements [`ResourceLoader`])
//! - [`storage`]: Key-value storage in memory or a CBOR state file
//!   (implements [`KeyValueStorage`])
//!
//! [`ResourceLoader`]: crate::application::port::ResourceLoader
//! [`KeyValueStorage`]: crate::application::port::KeyValueStorage

pub mod content;
pub mod storage;

pub use content::{ContentSource, DirectoryLoader, EmbeddedLoader};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
