//! Link validation rules.
//!
//! `validate_link` is a pure function over the candidate and the current
//! link set, so every rule is unit-testable without a store. The store runs
//! it under its write lock before inserting.

use std::collections::BTreeSet;

use kanopi_shared::types::EntityId;

use super::error::HierarchyError;
use super::types::{HierarchyLink, NewHierarchyLink};

/// Validates a candidate link against the existing link set.
///
/// Three rules, in order:
/// 1. parent and child must differ;
/// 2. no other active link for the same child may overlap the candidate's
///    effective interval (a child has at most one parent at any instant);
/// 3. the candidate's parent must not be reachable from the candidate's
///    child over the active-link graph (dates ignored); a reachable parent
///    means the child is already a transitive ancestor and the new edge
///    would close a cycle.
///
/// # Errors
///
/// Returns `HierarchyError` describing the first violated rule.
pub fn validate_link(
    candidate: &NewHierarchyLink,
    existing: &[HierarchyLink],
) -> Result<(), HierarchyError> {
    if candidate.parent_id == candidate.child_id {
        return Err(HierarchyError::SelfLink);
    }

    let overlap = existing.iter().any(|link| {
        link.active
            && link.child_id == candidate.child_id
            && link.period_overlaps(candidate.date_from, candidate.date_to)
    });
    if overlap {
        return Err(HierarchyError::OverlappingLink {
            child_id: candidate.child_id,
        });
    }

    if reaches(existing, candidate.child_id, candidate.parent_id) {
        return Err(HierarchyError::CycleDetected {
            parent_id: candidate.parent_id,
            child_id: candidate.child_id,
        });
    }

    Ok(())
}

/// Breadth-first reachability over all active links, ignoring dates.
///
/// Dates are ignored because a link that is dormant today can become
/// effective later; a cycle must be impossible at every instant.
fn reaches(links: &[HierarchyLink], from: EntityId, target: EntityId) -> bool {
    let mut seen = BTreeSet::from([from]);
    let mut frontier = vec![from];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for link in links {
            if link.active && frontier.contains(&link.parent_id) && seen.insert(link.child_id) {
                if link.child_id == target {
                    return true;
                }
                next.push(link.child_id);
            }
        }
        frontier = next;
    }
    false
}
