//! Hierarchy link records with effective dating.

use chrono::NaiveDate;
use kanopi_shared::types::{EntityId, HierarchyLinkId};
use serde::{Deserialize, Serialize};

/// A time-bounded parent-child ownership edge between two entities.
///
/// A child has at most one parent at any instant: for any two active links
/// sharing a `child_id`, the effective intervals must not overlap. The link
/// graph must stay acyclic at every point in time. Both rules are enforced by
/// [`crate::hierarchy::validate_link`] before a link reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLink {
    /// Unique identifier.
    pub id: HierarchyLinkId,
    /// The owning (parent) entity.
    pub parent_id: EntityId,
    /// The owned (child) entity.
    pub child_id: EntityId,
    /// First day the link is effective (inclusive).
    pub date_from: NaiveDate,
    /// Last day the link is effective (inclusive); `None` means open-ended.
    pub date_to: Option<NaiveDate>,
    /// Inactive links are kept for history but ignored by every traversal.
    pub active: bool,
}

impl HierarchyLink {
    /// Returns true if this link is active and effective on the given date.
    #[must_use]
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.active && self.date_from <= date && self.date_to.is_none_or(|end| date <= end)
    }

    /// Returns true if this link's effective interval overlaps the given one.
    ///
    /// An open-ended interval (`date_to = None`) extends to the far future on
    /// both sides of the comparison.
    #[must_use]
    pub fn period_overlaps(&self, date_from: NaiveDate, date_to: Option<NaiveDate>) -> bool {
        let self_end = self.date_to.unwrap_or(NaiveDate::MAX);
        let other_end = date_to.unwrap_or(NaiveDate::MAX);
        self.date_from <= other_end && date_from <= self_end
    }
}

/// Input for creating a new hierarchy link; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHierarchyLink {
    /// The owning (parent) entity.
    pub parent_id: EntityId,
    /// The owned (child) entity.
    pub child_id: EntityId,
    /// First day the link is effective (inclusive).
    pub date_from: NaiveDate,
    /// Last day the link is effective (inclusive); `None` means open-ended.
    pub date_to: Option<NaiveDate>,
}

impl NewHierarchyLink {
    /// Materializes the link record with a fresh id, active by default.
    #[must_use]
    pub fn into_link(self) -> HierarchyLink {
        HierarchyLink {
            id: HierarchyLinkId::new(),
            parent_id: self.parent_id,
            child_id: self.child_id,
            date_from: self.date_from,
            date_to: self.date_to,
            active: true,
        }
    }
}
