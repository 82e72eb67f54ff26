//! In-memory hierarchy link store.
//!
//! This is the server-side mutation surface for links. Validation and insert
//! happen under one write lock, so two concurrent creations cannot both pass
//! validation against stale data and jointly produce an overlap or a cycle.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use kanopi_shared::types::{EntityId, HierarchyLinkId};

use super::error::HierarchyError;
use super::resolver;
use super::types::{HierarchyLink, NewHierarchyLink};
use super::validation::validate_link;

/// Thread-safe store of hierarchy links.
#[derive(Debug, Default)]
pub struct LinkStore {
    links: RwLock<Vec<HierarchyLink>>,
}

impl LinkStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with previously validated links.
    #[must_use]
    pub fn with_links(links: Vec<HierarchyLink>) -> Self {
        Self {
            links: RwLock::new(links),
        }
    }

    /// Validates and inserts a new link atomically.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError` if the candidate violates a link rule; the
    /// store is left unchanged.
    pub fn create(&self, candidate: NewHierarchyLink) -> Result<HierarchyLink, HierarchyError> {
        let mut links = self.write();
        validate_link(&candidate, &links)?;
        let link = candidate.into_link();
        links.push(link.clone());
        Ok(link)
    }

    /// Deactivates a link, keeping it for history.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError::LinkNotFound` if no link has the given id.
    pub fn deactivate(&self, id: HierarchyLinkId) -> Result<HierarchyLink, HierarchyError> {
        let mut links = self.write();
        let link = links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or(HierarchyError::LinkNotFound(id))?;
        link.active = false;
        Ok(link.clone())
    }

    /// Returns a point-in-time copy of every link, active or not.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HierarchyLink> {
        self.read().clone()
    }

    /// Resolves the entity tree under `root` on `at_date`.
    #[must_use]
    pub fn descendants(
        &self,
        root: EntityId,
        at_date: NaiveDate,
        include_self: bool,
    ) -> BTreeSet<EntityId> {
        resolver::descendants(&self.read(), root, at_date, include_self)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<HierarchyLink>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<HierarchyLink>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }
}
