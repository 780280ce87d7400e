//! Data layer for the Spiritkeep backend (`PostgreSQL`).
//!
//! `PostgreSQL` is the single system of record: the engine reads and
//! writes spiritling records through [`PgSpiritlingStore`] and appends
//! owner-visible history through [`PgActionLog`]. Both implement the
//! store seams defined in `spiritkeep-core`, so the engine itself never
//! names this crate's types.
//!
//! # Modules
//!
//! - [`postgres`] -- Connection pool, configuration, and migrations
//! - [`spiritling_store`] -- Spiritling record load/save
//! - [`action_log`] -- Append-only action history
//! - [`error`] -- Shared error types

pub mod action_log;
pub mod error;
pub mod postgres;
pub mod spiritling_store;

// Re-export primary types for convenience.
pub use action_log::PgActionLog;
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use spiritling_store::{PgSpiritlingStore, SpiritlingRow};
