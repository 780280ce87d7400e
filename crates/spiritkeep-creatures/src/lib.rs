//! Decay, autonomous-action, and growth rules for spiritlings.
//!
//! This crate contains the logic layer for spiritling care -- everything
//! that mutates a [`Spiritling`] without touching I/O. It sits between
//! `spiritkeep-types` (which defines the data structures) and
//! `spiritkeep-core` (which handles persistence and scheduling).
//!
//! # Modules
//!
//! - [`autonomy`] -- Probabilistic self-feed, self-play, and idle-activity rules
//! - [`catch_up`] -- Offline condition drift for elapsed wall-clock time
//! - [`config`] -- Tunable parameters for care mechanics ([`CareConfig`])
//! - [`decay`] -- Per-tick condition decay
//! - [`error`] -- Error types for rule evaluation ([`CreatureError`])
//! - [`growth`] -- Level-up mechanics and growth-stage classification
//!
//! [`Spiritling`]: spiritkeep_types::Spiritling

pub mod autonomy;
pub mod catch_up;
pub mod config;
pub mod decay;
pub mod error;
pub mod growth;

mod rolls;

// Re-export primary types at crate root for convenience.
pub use autonomy::{ActionEvent, apply_autonomous_actions};
pub use catch_up::{MAX_CATCH_UP_MINUTES, apply_elapsed};
pub use config::CareConfig;
pub use decay::apply_decay;
pub use error::CreatureError;
pub use growth::{XP_PER_LEVEL, required_experience, stage_for_level, try_level_up};
