//! Tree resolution over effective-dated links.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use kanopi_shared::types::EntityId;

use super::types::HierarchyLink;

/// Returns every entity reachable from `root` through links effective on
/// `at_date`.
///
/// Breadth-first: each round follows active links whose effective interval
/// contains `at_date` and whose parent is in the current frontier. The
/// visited set guarantees termination even if cyclic data bypassed
/// validation. `include_self` controls whether `root` itself appears in the
/// result (consolidation passes `true`).
#[must_use]
pub fn descendants(
    links: &[HierarchyLink],
    root: EntityId,
    at_date: NaiveDate,
    include_self: bool,
) -> BTreeSet<EntityId> {
    let mut seen = BTreeSet::from([root]);
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for link in links {
            if link.is_effective_on(at_date)
                && frontier.contains(&link.parent_id)
                && seen.insert(link.child_id)
            {
                next.push(link.child_id);
            }
        }
        frontier = next;
    }

    if !include_self {
        seen.remove(&root);
    }
    seen
}
