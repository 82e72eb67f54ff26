//! Statement row types.

use kanopi_shared::types::{AccountId, EntityId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::types::InternalGroup;

/// The three consolidated statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Balance Sheet.
    #[serde(rename = "BS")]
    BalanceSheet,
    /// Profit & Loss.
    #[serde(rename = "PL")]
    ProfitLoss,
    /// Cash Flow.
    #[serde(rename = "CF")]
    CashFlow,
}

/// Statement-specific bucket a normalized amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    /// Balance Sheet assets.
    Assets,
    /// Balance Sheet liabilities.
    Liabilities,
    /// Balance Sheet equity.
    Equity,
    /// Profit & Loss revenue.
    Revenue,
    /// Profit & Loss expenses.
    Expenses,
    /// Cash Flow operating activities.
    Operating,
    /// Cash Flow investing activities.
    Investing,
    /// Cash Flow financing activities.
    Financing,
    /// Rows with no better home on the statement.
    Other,
}

/// One row of the raw consolidation matrix (statement not yet applied).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// Entity whose books the row came from.
    pub entity_id: EntityId,
    /// Entity display code; falls back to the id when the master has none.
    pub entity_code: String,
    /// Aggregated account.
    pub account_id: AccountId,
    /// Account code from the accounts master.
    pub account_code: String,
    /// Account name from the accounts master.
    pub account_name: String,
    /// Accounting classification.
    pub internal_group: InternalGroup,
    /// Sum of debits.
    pub debit: Decimal,
    /// Sum of credits.
    pub credit: Decimal,
    /// Sum of balances (`debit - credit`).
    pub balance: Decimal,
}

/// One row of a normalized statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Entity whose books the row came from.
    pub entity_id: EntityId,
    /// Entity display code.
    pub entity_code: String,
    /// Aggregated account.
    pub account_id: AccountId,
    /// Account code from the accounts master.
    pub account_code: String,
    /// Account name from the accounts master.
    pub account_name: String,
    /// Accounting classification.
    pub internal_group: InternalGroup,
    /// Sum of debits.
    pub debit: Decimal,
    /// Sum of credits.
    pub credit: Decimal,
    /// Sum of balances (`debit - credit`).
    pub balance: Decimal,
    /// Statement the row belongs to.
    pub statement: Statement,
    /// Section within the statement.
    pub section: Section,
    /// Normalized, presentation-signed amount.
    pub amount: Decimal,
}

impl StatementRow {
    /// Builds a statement row from a raw matrix row plus normalization
    /// results.
    #[must_use]
    pub fn from_matrix(
        row: MatrixRow,
        statement: Statement,
        section: Section,
        amount: Decimal,
    ) -> Self {
        Self {
            entity_id: row.entity_id,
            entity_code: row.entity_code,
            account_id: row.account_id,
            account_code: row.account_code,
            account_name: row.account_name,
            internal_group: row.internal_group,
            debit: row.debit,
            credit: row.credit,
            balance: row.balance,
            statement,
            section,
            amount,
        }
    }
}
