// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`persistence`]: Best-effort preference and snapshot persistence
//! - [`store`]: The content store and its language switching algorithm
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The composition root ([`crate::app`]) wires adapters into the store

pub mod persistence;
pub mod port;
pub mod store;

pub use persistence::{PersistenceLayer, PREFERENCE_KEY, SNAPSHOT_KEY};
pub use store::{ContentStore, StoreState, SwitchOutcome};
