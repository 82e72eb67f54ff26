//! Hierarchy error types.

use kanopi_shared::types::{EntityId, HierarchyLinkId};
use thiserror::Error;

/// Errors that can occur when validating or mutating hierarchy links.
///
/// Every variant is a validation failure: the store rolls nothing back
/// because nothing is written before validation passes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// Parent and child cannot be the same entity.
    #[error("Parent and child cannot be the same entity")]
    SelfLink,

    /// The child already belongs to a parent in an overlapping period.
    #[error("Entity {child_id} already belongs to another parent in the selected period")]
    OverlappingLink {
        /// The child entity whose periods collide.
        child_id: EntityId,
    },

    /// The link would make an entity its own transitive ancestor.
    #[error("Link {parent_id} -> {child_id} would create a cycle in the hierarchy")]
    CycleDetected {
        /// Parent of the rejected link.
        parent_id: EntityId,
        /// Child of the rejected link.
        child_id: EntityId,
    },

    /// No link with the given id exists in the store.
    #[error("Hierarchy link not found: {0}")]
    LinkNotFound(HierarchyLinkId),
}
