//! Post-tick hook for cross-cutting collaborators.
//!
//! Features outside this engine (achievements, quests, notifications) want
//! to react when a spiritling's state changes, but the tick processor must
//! not import them inline. Instead it emits one explicit callback after
//! each successfully persisted tick, and collaborators subscribe by
//! implementing [`TickHook`]. The hook sees the final record and the
//! events that were logged; it cannot veto or mutate the tick.

use spiritkeep_creatures::ActionEvent;
use spiritkeep_types::Spiritling;

/// Callback invoked after a spiritling's tick has been persisted.
pub trait TickHook: Send {
    /// Called once per successfully processed spiritling, after the record
    /// was saved and its log entries appended. `events` is empty when the
    /// tick only decayed (or did nothing).
    fn on_spiritling_processed(&mut self, spiritling: &Spiritling, events: &[ActionEvent]);
}

/// A no-op hook for deployments with no subscribed collaborators.
#[derive(Debug, Clone, Default)]
pub struct NoOpHook;

impl NoOpHook {
    /// Create a new no-op hook.
    pub const fn new() -> Self {
        Self
    }
}

impl TickHook for NoOpHook {
    fn on_spiritling_processed(&mut self, _spiritling: &Spiritling, _events: &[ActionEvent]) {}
}
