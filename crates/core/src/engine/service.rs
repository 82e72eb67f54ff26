//! Consolidation engine service.

use chrono::NaiveDate;
use kanopi_shared::types::{is_negligible, EntityId};
use kanopi_shared::ReportingPeriod;

use crate::elimination::generator::{EliminationGenerator, GenerationResult};
use crate::hierarchy::resolver;
use crate::ledger::aggregator::LedgerAggregator;
use crate::ledger::types::InternalGroup;
use crate::statement::cashflow::CashflowResolver;
use crate::statement::service::StatementService;
use crate::statement::types::{MatrixRow, StatementRow};

use super::snapshot::ConsolidationSnapshot;

/// The consolidation engine, bound to one snapshot.
///
/// Lookup tables (the cash-flow resolver) are built once at construction;
/// every method is a pure read over the snapshot.
pub struct ConsolidationEngine<'a> {
    snapshot: &'a ConsolidationSnapshot,
    cashflow: CashflowResolver,
}

impl<'a> ConsolidationEngine<'a> {
    /// Binds the engine to a snapshot.
    #[must_use]
    pub fn new(snapshot: &'a ConsolidationSnapshot) -> Self {
        Self {
            snapshot,
            cashflow: CashflowResolver::new(&snapshot.cashflow_mappings),
        }
    }

    /// Entities reachable from `root` on `at_date`, sorted by id.
    #[must_use]
    pub fn descendants(
        &self,
        root: EntityId,
        at_date: NaiveDate,
        include_self: bool,
    ) -> Vec<EntityId> {
        resolver::descendants(&self.snapshot.links, root, at_date, include_self)
            .into_iter()
            .collect()
    }

    /// Raw consolidation matrix for the tree under `root`.
    ///
    /// One row per (entity, account) with debit/credit/balance sums;
    /// statement, section and amount are not yet applied. Rows whose sums
    /// are all within noise distance of zero are dropped silently. The tree
    /// is resolved at the period end.
    #[must_use]
    pub fn compute_raw_matrix(
        &self,
        root: EntityId,
        period: ReportingPeriod,
        include_elimination: bool,
    ) -> Vec<MatrixRow> {
        let entities = resolver::descendants(&self.snapshot.links, root, period.date_to, true);
        let buckets = LedgerAggregator::aggregate(
            &self.snapshot.ledger_lines,
            &self.snapshot.eliminations,
            &entities,
            period,
            include_elimination,
        );

        buckets
            .into_iter()
            .filter(|(_, bucket)| {
                !(is_negligible(bucket.debit)
                    && is_negligible(bucket.credit)
                    && is_negligible(bucket.balance))
            })
            .map(|((entity_id, account_id), bucket)| {
                let meta = self.snapshot.accounts.get(&account_id);
                MatrixRow {
                    entity_id,
                    entity_code: self
                        .snapshot
                        .entity_codes
                        .get(&entity_id)
                        .cloned()
                        .unwrap_or_else(|| entity_id.to_string()),
                    account_id,
                    account_code: meta.map(|m| m.code.clone()).unwrap_or_default(),
                    account_name: meta.map(|m| m.name.clone()).unwrap_or_default(),
                    internal_group: meta.map_or(InternalGroup::Other, |m| m.internal_group),
                    debit: bucket.debit,
                    credit: bucket.credit,
                    balance: bucket.balance,
                }
            })
            .collect()
    }

    /// Consolidated Balance Sheet rows (posted eliminations included).
    #[must_use]
    pub fn compute_balance_sheet(
        &self,
        root: EntityId,
        period: ReportingPeriod,
    ) -> Vec<StatementRow> {
        StatementService::balance_sheet(self.compute_raw_matrix(root, period, true))
    }

    /// Consolidated Profit & Loss rows (posted eliminations included).
    #[must_use]
    pub fn compute_profit_loss(
        &self,
        root: EntityId,
        period: ReportingPeriod,
    ) -> Vec<StatementRow> {
        StatementService::profit_loss(self.compute_raw_matrix(root, period, true))
    }

    /// Consolidated Cash Flow rows (posted eliminations included).
    #[must_use]
    pub fn compute_cash_flow(&self, root: EntityId, period: ReportingPeriod) -> Vec<StatementRow> {
        StatementService::cash_flow(
            self.compute_raw_matrix(root, period, true),
            &self.snapshot.accounts,
            &self.cashflow,
        )
    }

    /// Generates the intercompany AR/AP elimination entry for `owner`.
    ///
    /// The returned entry is a draft; persisting and posting it are caller
    /// actions. See [`EliminationGenerator::generate`] for the soft-failure
    /// semantics.
    #[must_use]
    pub fn generate_eliminations(
        &self,
        owner: EntityId,
        period: ReportingPeriod,
    ) -> GenerationResult {
        EliminationGenerator::generate(
            owner,
            period,
            &self.snapshot.rules,
            &self.snapshot.links,
            &self.snapshot.partners,
            &self.snapshot.accounts,
            &self.snapshot.ledger_lines,
        )
    }
}
