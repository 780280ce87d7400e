//! Shared type definitions for the Spiritkeep virtual-pet backend.
//!
//! This crate is the single source of truth for the data model used across
//! the Spiritkeep workspace. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the island frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (growth stage, element, temperament, action kind)
//! - [`structs`] -- Core entity structs (spiritlings, action-log entries)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActionKind, Element, GrowthStage, Temperament};
pub use ids::{ActionLogId, OwnerId, SpiritlingId};
pub use structs::{ActionLogEntry, Conditions, STARTING_STAT, STAT_CAP, Spiritling, Stats};
