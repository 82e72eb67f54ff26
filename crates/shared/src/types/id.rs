//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `EntityId` where an
//! `AccountId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(EntityId, "Unique identifier for a legal entity (company).");
typed_id!(PartnerId, "Unique identifier for an entity's related party record.");
typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(AccountTagId, "Unique identifier for an account tag.");
typed_id!(HierarchyLinkId, "Unique identifier for a parent-child hierarchy link.");
typed_id!(LedgerLineId, "Unique identifier for a ledger line.");
typed_id!(EliminationEntryId, "Unique identifier for an elimination entry.");
typed_id!(EliminationRuleId, "Unique identifier for an elimination rule.");
