//! Ledger records and aggregation.
//!
//! This module holds the typed view of the external general ledger:
//! - Ledger line records (read-only input to the engine)
//! - Account master metadata (classification, tags)
//! - Per-(entity, account) balance aggregation over a period

pub mod aggregator;
pub mod types;

pub use aggregator::LedgerAggregator;
pub use types::{AccountKind, AccountMeta, BalanceBucket, InternalGroup, LedgerLine};
