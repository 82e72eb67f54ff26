//! Elimination entry, line and rule records.

use chrono::NaiveDate;
use kanopi_shared::types::{
    AccountId, EliminationEntryId, EliminationRuleId, EntityId, LedgerLineId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::EliminationError;

/// Lifecycle state of an elimination entry.
///
/// Only `Posted` entries contribute to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EliminationState {
    /// Entry is being drafted; excluded from aggregation.
    Draft,
    /// Entry is finalized and included in aggregation.
    Posted,
    /// Entry is cancelled; excluded from aggregation.
    Cancelled,
}

impl EliminationState {
    /// Returns true if lines of this entry count towards aggregation.
    #[must_use]
    pub fn is_posted(self) -> bool {
        self == Self::Posted
    }
}

/// One line of an elimination entry, always booked at the owning entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationLine {
    /// Entity whose consolidated figures the line adjusts.
    pub entity_id: EntityId,
    /// Contra account posted to.
    pub account_id: AccountId,
    /// Human-readable description of the eliminated pair.
    pub label: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

impl EliminationLine {
    /// Net balance of the line, always exactly `debit - credit`.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// An elimination entry: a bundle of balancing lines plus lifecycle state.
///
/// Lines are immutable once the entry is posted; the generator only ever
/// builds draft entries, and posting is an explicit caller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationEntry {
    /// Unique identifier.
    pub id: EliminationEntryId,
    /// Display name, e.g. `EE Intercompany AR/AP 2026-01-01 - 2026-01-31`.
    pub name: String,
    /// Root entity the elimination belongs to.
    pub owning_entity_id: EntityId,
    /// Booking date; the aggregator filters on it.
    pub date: NaiveDate,
    /// Lifecycle state.
    pub state: EliminationState,
    /// True when created by the generator rather than by hand.
    pub auto_generated: bool,
    /// Rule the entry was generated from, if any.
    pub rule_id: Option<EliminationRuleId>,
    /// Ledger lines that contributed to the generated amounts.
    pub source_line_ids: Vec<LedgerLineId>,
    /// The balancing lines.
    pub lines: Vec<EliminationLine>,
}

impl EliminationEntry {
    /// Posts a draft entry, making its lines visible to aggregation.
    ///
    /// # Errors
    ///
    /// Returns `EliminationError::InvalidTransition` unless the entry is a
    /// draft.
    pub fn post(&mut self) -> Result<(), EliminationError> {
        self.transition(EliminationState::Draft, EliminationState::Posted)
    }

    /// Cancels a draft or posted entry.
    ///
    /// # Errors
    ///
    /// Returns `EliminationError::InvalidTransition` if already cancelled.
    pub fn cancel(&mut self) -> Result<(), EliminationError> {
        if self.state == EliminationState::Cancelled {
            return Err(EliminationError::InvalidTransition {
                from: self.state,
                to: EliminationState::Cancelled,
            });
        }
        self.state = EliminationState::Cancelled;
        Ok(())
    }

    /// Moves a posted entry back to draft, excluding it from aggregation.
    ///
    /// # Errors
    ///
    /// Returns `EliminationError::InvalidTransition` unless the entry is
    /// posted.
    pub fn reset_to_draft(&mut self) -> Result<(), EliminationError> {
        self.transition(EliminationState::Posted, EliminationState::Draft)
    }

    fn transition(
        &mut self,
        expected: EliminationState,
        to: EliminationState,
    ) -> Result<(), EliminationError> {
        if self.state != expected {
            return Err(EliminationError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Sum of line debits.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of line credits.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Returns true if line debits equal line credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debit() == self.total_credit()
    }
}

/// Kind of elimination a rule configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Intercompany receivable/payable netting.
    IntercompanyArap,
    /// Intercompany revenue against cost of goods sold.
    IntercompanyRevCogs,
    /// Intercompany loans.
    IntercompanyLoans,
    /// Dividend elimination.
    Dividend,
    /// Unrealized profit in inventory.
    InventoryUnrealizedProfit,
}

/// Elimination rule configuration, read-only input to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliminationRule {
    /// Unique identifier.
    pub id: EliminationRuleId,
    /// Display name.
    pub name: String,
    /// Root consolidation entity the rule applies to.
    pub owning_entity_id: EntityId,
    /// Inactive rules are ignored.
    pub active: bool,
    /// Kind of elimination configured.
    pub rule_type: RuleType,
    /// Contra receivable account booked at the owning entity.
    pub contra_ar: Option<AccountId>,
    /// Contra payable account booked at the owning entity.
    pub contra_ap: Option<AccountId>,
}

impl EliminationRule {
    /// Finds the active intercompany AR/AP rule for an owning entity.
    #[must_use]
    pub fn active_arap_for(rules: &[Self], owner: EntityId) -> Option<&Self> {
        rules.iter().find(|rule| {
            rule.active
                && rule.owning_entity_id == owner
                && rule.rule_type == RuleType::IntercompanyArap
        })
    }

    /// Like [`Self::active_arap_for`], for callers that require a rule.
    ///
    /// # Errors
    ///
    /// Returns `EliminationError::RuleNotFound` when no rule is configured.
    pub fn require_active_arap(
        rules: &[Self],
        owner: EntityId,
    ) -> Result<&Self, EliminationError> {
        Self::active_arap_for(rules, owner).ok_or(EliminationError::RuleNotFound(owner))
    }
}
