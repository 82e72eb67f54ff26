//! Cash-flow section mapping.

use std::collections::HashMap;

use kanopi_shared::types::{AccountId, AccountTagId};
use serde::{Deserialize, Serialize};

use crate::ledger::types::AccountMeta;

use super::types::Section;

/// The three cash-flow statement sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashflowSection {
    /// Operating activities (the default for unmapped accounts).
    Operating,
    /// Investing activities.
    Investing,
    /// Financing activities.
    Financing,
}

impl From<CashflowSection> for Section {
    fn from(section: CashflowSection) -> Self {
        match section {
            CashflowSection::Operating => Self::Operating,
            CashflowSection::Investing => Self::Investing,
            CashflowSection::Financing => Self::Financing,
        }
    }
}

/// What a cash-flow mapping row targets: one account or one tag, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashflowTarget {
    /// Mapping applies to one specific account.
    Account(AccountId),
    /// Mapping applies to every account carrying the tag.
    Tag(AccountTagId),
}

/// One configured cash-flow mapping row, unique per target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowMapping {
    /// Account or tag the mapping applies to.
    pub target: CashflowTarget,
    /// Section assigned by the mapping.
    pub section: CashflowSection,
    /// `1` keeps the base amount, `-1` flips the direction of the flow.
    pub sign: i32,
}

/// Total section/sign resolution built once per engine call.
///
/// Resolution order: exact account mapping, then the first of the account's
/// tags that has a mapping, then the `(OPERATING, 1)` default. Section and
/// sign always come from the same mapping row.
#[derive(Debug, Clone, Default)]
pub struct CashflowResolver {
    by_account: HashMap<AccountId, (CashflowSection, i32)>,
    by_tag: HashMap<AccountTagId, (CashflowSection, i32)>,
}

impl CashflowResolver {
    /// Indexes the configured mappings; the first row per target wins.
    #[must_use]
    pub fn new(mappings: &[CashflowMapping]) -> Self {
        let mut resolver = Self::default();
        for mapping in mappings {
            let value = (mapping.section, normalize_sign(mapping.sign));
            match mapping.target {
                CashflowTarget::Account(account_id) => {
                    resolver.by_account.entry(account_id).or_insert(value);
                }
                CashflowTarget::Tag(tag_id) => {
                    resolver.by_tag.entry(tag_id).or_insert(value);
                }
            }
        }
        resolver
    }

    /// Resolves the section and sign for an account.
    ///
    /// Total: an unknown account (no metadata, no mapping) resolves to the
    /// documented `(OPERATING, 1)` default.
    #[must_use]
    pub fn resolve(&self, meta: Option<&AccountMeta>) -> (CashflowSection, i32) {
        let Some(meta) = meta else {
            return (CashflowSection::Operating, 1);
        };
        if let Some(&hit) = self.by_account.get(&meta.account_id) {
            return hit;
        }
        meta.tag_ids
            .iter()
            .find_map(|tag| self.by_tag.get(tag).copied())
            .unwrap_or((CashflowSection::Operating, 1))
    }
}

/// Collapses configured sign values onto `{1, -1}`; anything else keeps the
/// base direction.
fn normalize_sign(sign: i32) -> i32 {
    if sign < 0 { -1 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::ledger::types::{AccountKind, InternalGroup};

    fn account(n: u128) -> AccountId {
        AccountId::from_uuid(Uuid::from_u128(0x2000 + n))
    }

    fn tag(n: u128) -> AccountTagId {
        AccountTagId::from_uuid(Uuid::from_u128(0x3000 + n))
    }

    fn meta(account_id: AccountId, tag_ids: Vec<AccountTagId>) -> AccountMeta {
        AccountMeta {
            account_id,
            code: "100".to_string(),
            name: "cash".to_string(),
            internal_group: InternalGroup::Asset,
            kind: AccountKind::Regular,
            tag_ids,
        }
    }

    #[test]
    fn test_account_mapping_beats_tag_mapping() {
        let acc = account(1);
        let t = tag(1);
        let resolver = CashflowResolver::new(&[
            CashflowMapping {
                target: CashflowTarget::Tag(t),
                section: CashflowSection::Financing,
                sign: 1,
            },
            CashflowMapping {
                target: CashflowTarget::Account(acc),
                section: CashflowSection::Investing,
                sign: -1,
            },
        ]);
        let m = meta(acc, vec![t]);
        assert_eq!(resolver.resolve(Some(&m)), (CashflowSection::Investing, -1));
    }

    #[test]
    fn test_first_matching_tag_wins() {
        let acc = account(1);
        let (t1, t2) = (tag(1), tag(2));
        let resolver = CashflowResolver::new(&[
            CashflowMapping {
                target: CashflowTarget::Tag(t2),
                section: CashflowSection::Financing,
                sign: -1,
            },
            CashflowMapping {
                target: CashflowTarget::Tag(t1),
                section: CashflowSection::Investing,
                sign: 1,
            },
        ]);
        // tag order on the account decides, not mapping order
        let m = meta(acc, vec![t1, t2]);
        assert_eq!(resolver.resolve(Some(&m)), (CashflowSection::Investing, 1));
    }

    #[test]
    fn test_unmapped_account_defaults_to_operating() {
        let resolver = CashflowResolver::new(&[]);
        let m = meta(account(1), vec![tag(1)]);
        assert_eq!(resolver.resolve(Some(&m)), (CashflowSection::Operating, 1));
        assert_eq!(resolver.resolve(None), (CashflowSection::Operating, 1));
    }

    #[test]
    fn test_zero_sign_is_normalized_to_keep() {
        let acc = account(1);
        let resolver = CashflowResolver::new(&[CashflowMapping {
            target: CashflowTarget::Account(acc),
            section: CashflowSection::Investing,
            sign: 0,
        }]);
        let m = meta(acc, vec![]);
        assert_eq!(resolver.resolve(Some(&m)), (CashflowSection::Investing, 1));
    }
}
