//! Statement normalization.
//!
//! This module turns the aggregated (entity, account) matrix into rows of
//! the three consolidated statements:
//! - Balance Sheet, Profit & Loss and Cash Flow section mapping
//! - Statement-specific sign normalization of ledger balances
//! - Cash-flow section/sign resolution from configured mappings

pub mod cashflow;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod tests;

pub use cashflow::{CashflowMapping, CashflowResolver, CashflowSection, CashflowTarget};
pub use service::StatementService;
pub use types::{MatrixRow, Section, Statement, StatementRow};
