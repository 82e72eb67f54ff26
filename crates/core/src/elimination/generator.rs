//! Intercompany AR/AP elimination generator.

use std::collections::{BTreeMap, HashMap};

use kanopi_shared::types::{AccountId, EliminationEntryId, EntityId, PartnerId};
use kanopi_shared::{types::is_negligible, ReportingPeriod};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::hierarchy::{resolver, HierarchyLink};
use crate::ledger::types::{AccountMeta, LedgerLine};

use super::types::{EliminationEntry, EliminationLine, EliminationRule, EliminationState};

/// A soft failure surfaced to the caller instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationWarning {
    /// The rule lacks a contra account, so a qualifying pair was skipped.
    #[error("Rule is missing contra accounts; skipped pair {src} -> {dst} ({amount})")]
    MissingContraAccounts {
        /// Entity holding the intercompany balance.
        src: EntityId,
        /// Entity the balance is held against.
        dst: EntityId,
        /// Accumulated pair amount that went unbooked.
        amount: Decimal,
    },
}

/// Outcome of one generation run.
///
/// `entry` is `None` for every "nothing to do" case: no rule, no qualifying
/// pairs, or every pair skipped. Warnings are populated independently.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    /// The generated draft entry, if any.
    pub entry: Option<EliminationEntry>,
    /// Soft failures encountered while booking pairs.
    pub warnings: Vec<GenerationWarning>,
}

/// Generator for intercompany AR/AP elimination entries.
pub struct EliminationGenerator;

impl EliminationGenerator {
    /// Generates one draft elimination entry for `owner` over `period`.
    ///
    /// Scans posted receivable/payable lines of the owner's entity tree,
    /// accumulates net intercompany balances per ordered `(src, dst)` pair
    /// (netting AR against AP inside each entity's own books), and books
    /// balancing lines on the rule's contra accounts at the owning entity.
    ///
    /// A reconciled exposure shows up twice, once from each side's books
    /// with opposite signs; the negative-side pair is skipped when its
    /// mirror accumulated a positive sum, so each exposure books exactly
    /// once, from the receivable side.
    ///
    /// The entry is returned in draft state; posting is a separate caller
    /// action. Missing rule, empty tree and no qualifying pairs are quiet
    /// no-ops, not errors.
    #[must_use]
    pub fn generate(
        owner: EntityId,
        period: ReportingPeriod,
        rules: &[EliminationRule],
        links: &[HierarchyLink],
        partners: &HashMap<EntityId, PartnerId>,
        accounts: &HashMap<AccountId, AccountMeta>,
        lines: &[LedgerLine],
    ) -> GenerationResult {
        let Some(rule) = EliminationRule::active_arap_for(rules, owner) else {
            debug!(%owner, "no active intercompany AR/AP rule, skipping generation");
            return GenerationResult::default();
        };

        let tree = resolver::descendants(links, owner, period.date_to, true);
        if tree.is_empty() {
            debug!(%owner, "empty entity tree, skipping generation");
            return GenerationResult::default();
        }

        let party_to_entity: HashMap<PartnerId, EntityId> = partners
            .iter()
            .filter(|(entity, _)| tree.contains(entity))
            .map(|(&entity, &party)| (party, entity))
            .collect();

        let mut pair_sum: BTreeMap<(EntityId, EntityId), Decimal> = BTreeMap::new();
        let mut source_line_ids = Vec::new();
        for line in lines {
            if !line.posted
                || !period.contains(line.date)
                || !tree.contains(&line.entity_id)
                || line.balance().is_zero()
            {
                continue;
            }
            let intercompany = accounts
                .get(&line.account_id)
                .is_some_and(|meta| meta.kind.is_intercompany_candidate());
            if !intercompany {
                continue;
            }
            let Some(dst) = line.counterparty.and_then(|party| party_to_entity.get(&party)) else {
                continue;
            };
            if *dst == line.entity_id {
                continue;
            }
            *pair_sum.entry((line.entity_id, *dst)).or_default() += line.balance();
            source_line_ids.push(line.id);
        }

        if pair_sum.is_empty() {
            debug!(%owner, "no intercompany pairs in period, skipping generation");
            return GenerationResult::default();
        }

        let mut warnings = Vec::new();
        let mut entry_lines = Vec::new();
        for (&(src, dst), &amount) in &pair_sum {
            if is_negligible(amount) {
                continue;
            }
            if amount < Decimal::ZERO {
                let mirror = pair_sum.get(&(dst, src)).copied().unwrap_or_default();
                if mirror > Decimal::ZERO && !is_negligible(mirror) {
                    // same exposure, already booked from the receivable side
                    continue;
                }
            }
            let (Some(contra_ar), Some(contra_ap)) = (rule.contra_ar, rule.contra_ap) else {
                warn!(%src, %dst, %amount, "rule is missing contra accounts, skipping pair");
                warnings.push(GenerationWarning::MissingContraAccounts { src, dst, amount });
                continue;
            };

            let label = format!(
                "Eliminate IC AR/AP between {src} and {dst} ({}..{})",
                period.date_from, period.date_to
            );
            if amount > Decimal::ZERO {
                entry_lines.push(credit_line(owner, contra_ar, &label, amount));
                entry_lines.push(debit_line(owner, contra_ap, &label, amount));
            } else {
                let magnitude = -amount;
                entry_lines.push(debit_line(owner, contra_ar, &label, magnitude));
                entry_lines.push(credit_line(owner, contra_ap, &label, magnitude));
            }
        }

        if entry_lines.is_empty() {
            return GenerationResult {
                entry: None,
                warnings,
            };
        }

        let entry = EliminationEntry {
            id: EliminationEntryId::new(),
            name: format!(
                "EE Intercompany AR/AP {} - {}",
                period.date_from, period.date_to
            ),
            owning_entity_id: owner,
            date: period.date_to,
            state: EliminationState::Draft,
            auto_generated: true,
            rule_id: Some(rule.id),
            source_line_ids,
            lines: entry_lines,
        };
        GenerationResult {
            entry: Some(entry),
            warnings,
        }
    }
}

fn debit_line(owner: EntityId, account: AccountId, label: &str, amount: Decimal) -> EliminationLine {
    EliminationLine {
        entity_id: owner,
        account_id: account,
        label: label.to_string(),
        debit: amount,
        credit: Decimal::ZERO,
    }
}

fn credit_line(
    owner: EntityId,
    account: AccountId,
    label: &str,
    amount: Decimal,
) -> EliminationLine {
    EliminationLine {
        entity_id: owner,
        account_id: account,
        label: label.to_string(),
        debit: Decimal::ZERO,
        credit: amount,
    }
}
