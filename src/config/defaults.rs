// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Content**: baseline language
//! - **Storage**: snapshot persistence switches

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Code of the always-available baseline document (`data.json`).
pub const DEFAULT_BASELINE_LANGUAGE: &str = "en";

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Write a content snapshot on every document change.
pub const DEFAULT_PERSIST_SNAPSHOTS: bool = true;

/// Replace the loaded document with the stored snapshot at startup.
pub const DEFAULT_RESTORE_SNAPSHOT: bool = false;
