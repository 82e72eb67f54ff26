//! Request-scoped snapshot of external data.

use std::collections::HashMap;

use kanopi_shared::types::{AccountId, EntityId, PartnerId};
use serde::{Deserialize, Serialize};

use crate::elimination::types::{EliminationEntry, EliminationRule};
use crate::hierarchy::types::HierarchyLink;
use crate::ledger::types::{AccountMeta, LedgerLine};
use crate::statement::cashflow::CashflowMapping;

/// Everything one engine call reads, captured at a single point in time.
///
/// The caller assembles the snapshot from the external ledger feed, the
/// accounts and entity masters and the configuration records, then hands it
/// to [`crate::engine::ConsolidationEngine`]. Each request gets its own
/// snapshot; nothing here is shared mutable state, so a half-posted
/// elimination entry can never be half-reflected in one computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsolidationSnapshot {
    /// Hierarchy links (active and historical).
    pub links: Vec<HierarchyLink>,
    /// General-ledger lines for the entities and periods of interest.
    pub ledger_lines: Vec<LedgerLine>,
    /// Accounts-master metadata by account.
    pub accounts: HashMap<AccountId, AccountMeta>,
    /// Entity to related-party mapping (intercompany matching).
    pub partners: HashMap<EntityId, PartnerId>,
    /// Entity display codes; entities without one fall back to their id.
    pub entity_codes: HashMap<EntityId, String>,
    /// Configured cash-flow section mappings.
    pub cashflow_mappings: Vec<CashflowMapping>,
    /// Configured elimination rules.
    pub rules: Vec<EliminationRule>,
    /// Existing elimination entries with their lines.
    pub eliminations: Vec<EliminationEntry>,
}
