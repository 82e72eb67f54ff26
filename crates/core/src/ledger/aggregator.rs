//! Per-(entity, account) balance aggregation.

use std::collections::{BTreeMap, BTreeSet};

use kanopi_shared::types::{AccountId, EntityId};
use kanopi_shared::ReportingPeriod;

use crate::elimination::types::EliminationEntry;

use super::types::{BalanceBucket, LedgerLine};

/// Key of one aggregation bucket.
pub type BucketKey = (EntityId, AccountId);

/// Pure read-and-reduce aggregation over ledger and elimination lines.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Buckets posted balances by (entity, account) for a period.
    ///
    /// Sums debit/credit/balance of every posted ledger line whose entity is
    /// in `entities` and whose date falls in `period`. With
    /// `include_elimination`, lines of posted elimination entries dated in
    /// the period are folded into the same buckets. No side effects.
    #[must_use]
    pub fn aggregate(
        lines: &[LedgerLine],
        eliminations: &[EliminationEntry],
        entities: &BTreeSet<EntityId>,
        period: ReportingPeriod,
        include_elimination: bool,
    ) -> BTreeMap<BucketKey, BalanceBucket> {
        let mut buckets: BTreeMap<BucketKey, BalanceBucket> = BTreeMap::new();

        for line in lines {
            if line.posted && entities.contains(&line.entity_id) && period.contains(line.date) {
                buckets
                    .entry((line.entity_id, line.account_id))
                    .or_default()
                    .accumulate(line.debit, line.credit, line.balance());
            }
        }

        if include_elimination {
            for entry in eliminations {
                if !entry.state.is_posted() || !period.contains(entry.date) {
                    continue;
                }
                for line in &entry.lines {
                    if entities.contains(&line.entity_id) {
                        buckets
                            .entry((line.entity_id, line.account_id))
                            .or_default()
                            .accumulate(line.debit, line.credit, line.balance());
                    }
                }
            }
        }

        buckets
    }
}
