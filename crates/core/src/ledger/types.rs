//! Ledger domain types.
//!
//! The external ledger feed and accounts master arrive as loosely-typed rows
//! upstream; they are converted to these structs at the engine boundary.

use chrono::NaiveDate;
use kanopi_shared::types::{AccountId, AccountTagId, EntityId, LedgerLineId, PartnerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accounting classification of an account, supplied by the accounts master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternalGroup {
    /// Asset accounts (debit-heavy).
    Asset,
    /// Liability accounts (credit-heavy).
    Liability,
    /// Equity accounts (credit-heavy).
    Equity,
    /// Income accounts (credit-heavy).
    Income,
    /// Expense accounts (debit-heavy).
    Expense,
    /// Anything else (off-balance, suspense).
    Other,
}

/// Receivable/payable classification used by the intercompany scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Trade receivable account.
    Receivable,
    /// Trade payable account.
    Payable,
    /// Any other account.
    Regular,
}

impl AccountKind {
    /// Returns true for the account kinds scanned for intercompany balances.
    #[must_use]
    pub fn is_intercompany_candidate(self) -> bool {
        matches!(self, Self::Receivable | Self::Payable)
    }
}

/// Accounts-master metadata for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountMeta {
    /// The account this row describes.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Accounting classification.
    pub internal_group: InternalGroup,
    /// Receivable/payable classification.
    pub kind: AccountKind,
    /// Tags attached to the account (cash-flow mapping targets).
    pub tag_ids: Vec<AccountTagId>,
}

/// One general-ledger line, read-only input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Unique identifier.
    pub id: LedgerLineId,
    /// Entity whose books carry the line.
    pub entity_id: EntityId,
    /// Account posted to.
    pub account_id: AccountId,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Only posted lines participate in aggregation.
    pub posted: bool,
    /// Posting date.
    pub date: NaiveDate,
    /// Related party on the line, if any (intercompany matching key).
    pub counterparty: Option<PartnerId>,
}

impl LedgerLine {
    /// Net balance of the line, always exactly `debit - credit`.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Debit/credit/balance sums for one (entity, account) bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBucket {
    /// Sum of debits.
    pub debit: Decimal,
    /// Sum of credits.
    pub credit: Decimal,
    /// Sum of balances.
    pub balance: Decimal,
}

impl BalanceBucket {
    /// Folds one line's amounts into the bucket.
    pub fn accumulate(&mut self, debit: Decimal, credit: Decimal, balance: Decimal) {
        self.debit += debit;
        self.credit += credit;
        self.balance += balance;
    }
}
