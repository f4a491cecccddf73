// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`loader`]: Content document fetching
//! - [`storage`]: Durable key-value storage
//!
//! # Design Notes
//!
//! - Loading is `async`; storage is synchronous and best-effort
//! - Neither trait requires `Send`: the store runs on one thread
//! - Methods return `Result` with port-level error types
//!
//! # Example
//!
//! ```ignore
//! use folio_store::application::port::{KeyValueStorage, ResourceLoader};
//! use folio_store::domain::content::Locator;
//!
//! async fn cache_baseline(loader: &impl ResourceLoader, storage: &impl KeyValueStorage) {
//!     if let Ok(text) = loader.fetch(&Locator::baseline()).await {
//!         let _ = storage.set("baseline", &text);
//!     }
//! }
//! ```

pub mod loader;
pub mod storage;

// Re-export main types for convenience
pub use loader::{LoadError, ResourceLoader};
pub use storage::{KeyValueStorage, StorageError};
