//! Intercompany elimination entries.
//!
//! Elimination entries cancel intercompany balances for consolidation
//! purposes only; they never touch a standalone entity's books. This module
//! provides:
//! - Entry, line and rule records with the draft/posted/cancelled lifecycle
//! - The AR/AP generator that detects intercompany imbalances and books
//!   balancing lines on the rule's contra accounts

pub mod error;
pub mod generator;
pub mod types;

pub use error::EliminationError;
pub use generator::{EliminationGenerator, GenerationResult, GenerationWarning};
pub use types::{
    EliminationEntry, EliminationLine, EliminationRule, EliminationState, RuleType,
};
