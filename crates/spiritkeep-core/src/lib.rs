//! Tick processor, scheduler, and store seams for the Spiritkeep engine.
//!
//! This crate orchestrates the background maintenance loop that keeps
//! every spiritling's state moving: a single scheduler task lists the
//! creatures, a processor applies one tick of decay/autonomy/growth rules
//! to each, and two narrow store traits decouple all of it from the
//! persistence technology.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `spiritkeep-config.yaml`.
//! - [`hook`] -- [`TickHook`] post-tick callback for external collaborators.
//! - [`processor`] -- Per-spiritling tick processing ([`TickProcessor`]).
//! - [`scheduler`] -- The long-running background loop ([`Scheduler`]).
//! - [`store`] -- [`SpiritlingStore`] / [`ActionLogSink`] seams and
//!   in-memory test implementations.
//!
//! [`TickHook`]: hook::TickHook
//! [`TickProcessor`]: processor::TickProcessor
//! [`Scheduler`]: scheduler::Scheduler
//! [`SpiritlingStore`]: store::SpiritlingStore
//! [`ActionLogSink`]: store::ActionLogSink

pub mod config;
pub mod hook;
pub mod processor;
pub mod scheduler;
pub mod store;

// Re-export primary types at crate root for convenience.
pub use config::{ConfigError, EngineConfig};
pub use hook::{NoOpHook, TickHook};
pub use processor::{ProcessError, TickOutcome, TickProcessor, TickTuning};
pub use scheduler::{PassSummary, Scheduler, SchedulerConfig};
pub use store::{
    ActionLogSink, MemoryActionLog, MemorySpiritlingStore, SpiritlingStore, StoreError,
};
