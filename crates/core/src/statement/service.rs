//! Statement normalization service.
//!
//! Ledger balances are `debit - credit`, so credit-heavy groups (liability,
//! equity, income) carry negative balances. Each statement flips signs so
//! its sections present conventionally positive magnitudes that can be
//! summed and compared.

use std::collections::HashMap;

use kanopi_shared::types::AccountId;
use rust_decimal::Decimal;

use crate::ledger::types::{AccountMeta, InternalGroup};

use super::cashflow::CashflowResolver;
use super::types::{MatrixRow, Section, Statement, StatementRow};

/// Service for normalizing matrix rows into statement rows.
pub struct StatementService;

impl StatementService {
    /// Balance Sheet section for an accounting classification.
    #[must_use]
    pub fn balance_sheet_section(group: InternalGroup) -> Section {
        match group {
            InternalGroup::Asset => Section::Assets,
            InternalGroup::Liability => Section::Liabilities,
            InternalGroup::Equity => Section::Equity,
            _ => Section::Other,
        }
    }

    /// Balance Sheet presentation amount.
    ///
    /// Assets keep their balance; liabilities and equity flip sign so both
    /// sides of the sheet read positive.
    #[must_use]
    pub fn balance_sheet_amount(group: InternalGroup, balance: Decimal) -> Decimal {
        match group {
            InternalGroup::Liability | InternalGroup::Equity => -balance,
            _ => balance,
        }
    }

    /// Profit & Loss section for an accounting classification.
    #[must_use]
    pub fn profit_loss_section(group: InternalGroup) -> Section {
        match group {
            InternalGroup::Income => Section::Revenue,
            InternalGroup::Expense => Section::Expenses,
            _ => Section::Other,
        }
    }

    /// Profit & Loss presentation amount.
    ///
    /// Income flips sign (credit-heavy) so revenue reads positive; expenses
    /// keep their balance.
    #[must_use]
    pub fn profit_loss_amount(group: InternalGroup, balance: Decimal) -> Decimal {
        match group {
            InternalGroup::Income => -balance,
            _ => balance,
        }
    }

    /// Cash Flow presentation amount: the P&L base times the mapping sign.
    #[must_use]
    pub fn cash_flow_amount(group: InternalGroup, balance: Decimal, sign: i32) -> Decimal {
        Self::profit_loss_amount(group, balance) * Decimal::from(sign)
    }

    /// Normalizes matrix rows into Balance Sheet rows.
    #[must_use]
    pub fn balance_sheet(rows: Vec<MatrixRow>) -> Vec<StatementRow> {
        rows.into_iter()
            .map(|row| {
                let section = Self::balance_sheet_section(row.internal_group);
                let amount = Self::balance_sheet_amount(row.internal_group, row.balance);
                StatementRow::from_matrix(row, Statement::BalanceSheet, section, amount)
            })
            .collect()
    }

    /// Normalizes matrix rows into Profit & Loss rows.
    #[must_use]
    pub fn profit_loss(rows: Vec<MatrixRow>) -> Vec<StatementRow> {
        rows.into_iter()
            .map(|row| {
                let section = Self::profit_loss_section(row.internal_group);
                let amount = Self::profit_loss_amount(row.internal_group, row.balance);
                StatementRow::from_matrix(row, Statement::ProfitLoss, section, amount)
            })
            .collect()
    }

    /// Normalizes matrix rows into Cash Flow rows.
    ///
    /// Section and sign come from the same resolved mapping entry; unmapped
    /// accounts land in OPERATING with the base amount unchanged.
    #[must_use]
    pub fn cash_flow(
        rows: Vec<MatrixRow>,
        accounts: &HashMap<AccountId, AccountMeta>,
        resolver: &CashflowResolver,
    ) -> Vec<StatementRow> {
        rows.into_iter()
            .map(|row| {
                let (section, sign) = resolver.resolve(accounts.get(&row.account_id));
                let amount = Self::cash_flow_amount(row.internal_group, row.balance, sign);
                StatementRow::from_matrix(row, Statement::CashFlow, section.into(), amount)
            })
            .collect()
    }
}
