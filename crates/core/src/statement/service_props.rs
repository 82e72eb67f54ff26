//! Property-based tests for statement normalization.

use kanopi_shared::types::{AccountId, EntityId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::types::InternalGroup;

use super::service::StatementService;
use super::types::{MatrixRow, Section};

/// A balance-sheet-group account in the closed-books pool. Income and
/// expense are assumed already closed to equity, which is what makes the
/// balance sheet identity hold for a balanced trial balance.
fn bs_group_strategy() -> impl Strategy<Value = InternalGroup> {
    prop_oneof![
        Just(InternalGroup::Asset),
        Just(InternalGroup::Liability),
        Just(InternalGroup::Equity),
    ]
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // 0.01 .. 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn account(index: usize) -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(0x2000 + index as u128))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* balanced closed-books trial balance,
    /// `sum(ASSETS) - sum(LIABILITIES) - sum(EQUITY) == 0` after
    /// normalization.
    #[test]
    fn prop_balance_sheet_identity(
        groups in proptest::collection::vec(bs_group_strategy(), 2..12),
        postings in proptest::collection::vec(
            (0usize..12, 0usize..12, amount_strategy()),
            1..40,
        ),
    ) {
        let entity = EntityId::new();
        // every posting debits one account and credits another, so the
        // trial balance is balanced by construction
        let mut balances = vec![Decimal::ZERO; groups.len()];
        for (debit_idx, credit_idx, amount) in postings {
            balances[debit_idx % groups.len()] += amount;
            balances[credit_idx % groups.len()] -= amount;
        }

        let rows: Vec<MatrixRow> = groups
            .iter()
            .enumerate()
            .map(|(i, &group)| MatrixRow {
                entity_id: entity,
                entity_code: "K001".to_string(),
                account_id: account(i),
                account_code: format!("{i:03}"),
                account_name: "prop account".to_string(),
                internal_group: group,
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
                balance: balances[i],
            })
            .collect();

        let sheet = StatementService::balance_sheet(rows);
        let section_total = |section: Section| -> Decimal {
            sheet
                .iter()
                .filter(|r| r.section == section)
                .map(|r| r.amount)
                .sum()
        };

        let identity = section_total(Section::Assets)
            - section_total(Section::Liabilities)
            - section_total(Section::Equity);
        prop_assert!(
            identity.abs() <= Decimal::new(1, 6),
            "identity violated: {identity}"
        );
    }

    /// *For any* balance, the P&L base and the cash-flow amount with sign 1
    /// agree, and sign -1 is its exact negation.
    #[test]
    fn prop_cash_flow_sign_flips_base(
        balance in (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        group in prop_oneof![
            Just(InternalGroup::Income),
            Just(InternalGroup::Expense),
            Just(InternalGroup::Other),
        ],
    ) {
        let base = StatementService::profit_loss_amount(group, balance);
        prop_assert_eq!(StatementService::cash_flow_amount(group, balance, 1), base);
        prop_assert_eq!(StatementService::cash_flow_amount(group, balance, -1), -base);
    }
}
