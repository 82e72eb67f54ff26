//! Unit tests for statement normalization.

use std::collections::HashMap;

use kanopi_shared::types::{AccountId, AccountTagId, EntityId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::ledger::types::{AccountKind, AccountMeta, InternalGroup};

use super::cashflow::{CashflowMapping, CashflowResolver, CashflowSection, CashflowTarget};
use super::service::StatementService;
use super::types::{MatrixRow, Section, Statement};

fn account(n: u128) -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(0x2000 + n))
}

fn row(group: InternalGroup, balance: Decimal) -> MatrixRow {
    row_for(account(1), group, balance)
}

fn row_for(account_id: AccountId, group: InternalGroup, balance: Decimal) -> MatrixRow {
    let (debit, credit) = if balance >= Decimal::ZERO {
        (balance, Decimal::ZERO)
    } else {
        (Decimal::ZERO, -balance)
    };
    MatrixRow {
        entity_id: EntityId::new(),
        entity_code: "K001".to_string(),
        account_id,
        account_code: "100".to_string(),
        account_name: "test".to_string(),
        internal_group: group,
        debit,
        credit,
        balance,
    }
}

#[rstest]
#[case(InternalGroup::Asset, Section::Assets)]
#[case(InternalGroup::Liability, Section::Liabilities)]
#[case(InternalGroup::Equity, Section::Equity)]
#[case(InternalGroup::Income, Section::Other)]
#[case(InternalGroup::Expense, Section::Other)]
#[case(InternalGroup::Other, Section::Other)]
fn test_balance_sheet_sections(#[case] group: InternalGroup, #[case] expected: Section) {
    assert_eq!(StatementService::balance_sheet_section(group), expected);
}

#[rstest]
#[case(InternalGroup::Asset, dec!(500), dec!(500))]
#[case(InternalGroup::Liability, dec!(-300), dec!(300))]
#[case(InternalGroup::Equity, dec!(-200), dec!(200))]
#[case(InternalGroup::Other, dec!(42), dec!(42))]
fn test_balance_sheet_amounts(
    #[case] group: InternalGroup,
    #[case] balance: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(StatementService::balance_sheet_amount(group, balance), expected);
}

#[rstest]
#[case(InternalGroup::Income, Section::Revenue)]
#[case(InternalGroup::Expense, Section::Expenses)]
#[case(InternalGroup::Asset, Section::Other)]
fn test_profit_loss_sections(#[case] group: InternalGroup, #[case] expected: Section) {
    assert_eq!(StatementService::profit_loss_section(group), expected);
}

#[test]
fn test_profit_loss_worked_example() {
    // credit-heavy income of 1000 and expenses of 400 both present positive
    let rows = vec![
        row(InternalGroup::Income, dec!(-1000)),
        row(InternalGroup::Expense, dec!(400)),
    ];
    let out = StatementService::profit_loss(rows);

    assert_eq!(out[0].statement, Statement::ProfitLoss);
    assert_eq!(out[0].section, Section::Revenue);
    assert_eq!(out[0].amount, dec!(1000));
    assert_eq!(out[1].section, Section::Expenses);
    assert_eq!(out[1].amount, dec!(400));
}

#[test]
fn test_balance_sheet_rows_keep_raw_figures() {
    let rows = vec![row(InternalGroup::Liability, dec!(-250))];
    let out = StatementService::balance_sheet(rows);

    assert_eq!(out[0].statement, Statement::BalanceSheet);
    assert_eq!(out[0].section, Section::Liabilities);
    assert_eq!(out[0].amount, dec!(250));
    // raw figures survive normalization for drill-down
    assert_eq!(out[0].balance, dec!(-250));
    assert_eq!(out[0].credit, dec!(250));
}

#[test]
fn test_cash_flow_worked_example() {
    // income account mapped to INVESTING with sign -1 and balance -500:
    // base = -(-500) = 500, amount = 500 * -1 = -500
    let acc = account(7);
    let accounts = HashMap::from([(
        acc,
        AccountMeta {
            account_id: acc,
            code: "700".to_string(),
            name: "disposal gain".to_string(),
            internal_group: InternalGroup::Income,
            kind: AccountKind::Regular,
            tag_ids: Vec::<AccountTagId>::new(),
        },
    )]);
    let resolver = CashflowResolver::new(&[CashflowMapping {
        target: CashflowTarget::Account(acc),
        section: CashflowSection::Investing,
        sign: -1,
    }]);

    let rows = vec![row_for(acc, InternalGroup::Income, dec!(-500))];
    let out = StatementService::cash_flow(rows, &accounts, &resolver);

    assert_eq!(out[0].statement, Statement::CashFlow);
    assert_eq!(out[0].section, Section::Investing);
    assert_eq!(out[0].amount, dec!(-500));
}

#[test]
fn test_cash_flow_defaults_to_operating() {
    let rows = vec![row(InternalGroup::Expense, dec!(120))];
    let out = StatementService::cash_flow(rows, &HashMap::new(), &CashflowResolver::default());

    assert_eq!(out[0].section, Section::Operating);
    assert_eq!(out[0].amount, dec!(120));
}

#[test]
fn test_cash_flow_tag_mapping_applies() {
    let acc = account(3);
    let tag = AccountTagId::new();
    let accounts = HashMap::from([(
        acc,
        AccountMeta {
            account_id: acc,
            code: "300".to_string(),
            name: "loan proceeds".to_string(),
            internal_group: InternalGroup::Other,
            kind: AccountKind::Regular,
            tag_ids: vec![tag],
        },
    )]);
    let resolver = CashflowResolver::new(&[CashflowMapping {
        target: CashflowTarget::Tag(tag),
        section: CashflowSection::Financing,
        sign: 1,
    }]);

    let rows = vec![row_for(acc, InternalGroup::Other, dec!(900))];
    let out = StatementService::cash_flow(rows, &accounts, &resolver);

    assert_eq!(out[0].section, Section::Financing);
    assert_eq!(out[0].amount, dec!(900));
}
