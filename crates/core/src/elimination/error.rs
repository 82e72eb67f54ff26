//! Elimination error types.

use kanopi_shared::types::EntityId;
use thiserror::Error;

use super::types::EliminationState;

/// Errors that can occur on elimination entries and rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EliminationError {
    /// The requested lifecycle transition is not allowed.
    #[error("Cannot move elimination entry from {from:?} to {to:?}")]
    InvalidTransition {
        /// Current state.
        from: EliminationState,
        /// Requested state.
        to: EliminationState,
    },

    /// No active AR/AP rule is configured for the owning entity.
    ///
    /// The generator treats this as "nothing to do"; this error exists for
    /// callers that explicitly require a rule.
    #[error("No active intercompany AR/AP rule for entity {0}")]
    RuleNotFound(EntityId),
}
