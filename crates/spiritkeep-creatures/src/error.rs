//! Error types for the spiritkeep-creatures crate.
//!
//! All rule evaluation that can fail returns typed errors rather than
//! panicking. In practice the only failure mode is arithmetic overflow in
//! the progression math, which the workspace lint policy requires us to
//! surface instead of wrapping silently.

/// Errors that can occur while evaluating creature rules.
#[derive(Debug, thiserror::Error)]
pub enum CreatureError {
    /// An arithmetic overflow occurred during a progression computation.
    #[error("arithmetic overflow in progression computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
