//! Property-based tests for ledger derivation and the trial balance.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::TrialBalanceCalculator;
use crate::journal::{Journal, JournalStore, TransactionInput};
use crate::ledger::LedgerBuilder;

fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn account() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Kas",
        "Piutang Usaha",
        "Persediaan Barang",
        "Pendapatan Penjualan",
        "Beban Gaji",
        "Utang Usaha",
        "Modal",
    ])
    .prop_map(str::to_string)
}

fn balanced_transaction() -> impl Strategy<Value = TransactionInput> {
    ((1u32..=28), account(), account(), amount()).prop_map(|(day, debit_account, credit_account, amount)| {
        TransactionInput {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            debit_account,
            debit_amount: amount,
            credit_account,
            credit_amount: amount,
            memo: format!("day {day}"),
        }
    })
}

fn journal_from(transactions: Vec<TransactionInput>) -> Journal {
    let mut store = JournalStore::new();
    for input in transactions {
        store.record_transaction(input).unwrap();
    }
    store.regular().clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No trial balance row carries both a debit and a credit.
    #[test]
    fn prop_rows_are_one_sided(
        transactions in prop::collection::vec(balanced_transaction(), 0..40),
    ) {
        let tb = TrialBalanceCalculator::from_journal(&journal_from(transactions));
        for row in &tb.rows {
            prop_assert!(row.debit.is_zero() || row.credit.is_zero(), "row {:?}", row);
            prop_assert!(row.debit >= Decimal::ZERO && row.credit >= Decimal::ZERO);
        }
    }

    /// A balanced journal yields a balanced trial balance.
    #[test]
    fn prop_balanced_journal_balanced_trial_balance(
        transactions in prop::collection::vec(balanced_transaction(), 0..40),
    ) {
        let tb = TrialBalanceCalculator::from_journal(&journal_from(transactions));
        prop_assert!(tb.totals.is_balanced);
        prop_assert_eq!(tb.totals.total_debit, tb.totals.total_credit);
    }

    /// Building the ledger twice gives identical results.
    #[test]
    fn prop_ledger_is_deterministic(
        transactions in prop::collection::vec(balanced_transaction(), 0..40),
    ) {
        let journal = journal_from(transactions);
        let first = LedgerBuilder::build(&journal);
        let second = LedgerBuilder::build(&journal);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            TrialBalanceCalculator::calculate(&first),
            TrialBalanceCalculator::calculate(&second)
        );
    }

    /// Each account's final balance equals the sum of its journal mutations,
    /// and ledger rows are in non-decreasing date order.
    #[test]
    fn prop_final_balance_matches_journal(
        transactions in prop::collection::vec(balanced_transaction(), 1..40),
    ) {
        let journal = journal_from(transactions);
        let ledger = LedgerBuilder::build(&journal);

        for account in &ledger {
            let expected: Decimal = journal
                .iter()
                .filter(|entry| entry.account == account.name)
                .map(|entry| entry.debit - entry.credit)
                .sum();
            prop_assert_eq!(account.closing_balance(), expected);
            prop_assert!(account.rows.windows(2).all(|w| w[0].date <= w[1].date));
            prop_assert!(!account.rows.is_empty());
        }
    }
}
