//! Property-based tests for journal recording.
//!
//! Property: any journal built only from accepted pairs balances exactly.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::JournalError;
use super::store::JournalStore;
use super::types::{AdjustmentInput, TransactionInput};

/// Strategy for non-negative currency amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for account names drawn from a small chart.
fn account() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Kas",
        "Piutang Usaha",
        "Pendapatan",
        "Beban Sewa",
        "Utang Usaha",
        "Modal",
    ])
    .prop_map(str::to_string)
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=28).prop_map(|day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
}

/// A transaction whose credit amount may or may not equal its debit amount.
fn transaction() -> impl Strategy<Value = TransactionInput> {
    (date(), account(), amount(), account(), amount(), any::<bool>()).prop_map(
        |(date, debit_account, debit_amount, credit_account, other, balanced)| TransactionInput {
            date,
            debit_account,
            debit_amount,
            credit_account,
            credit_amount: if balanced { debit_amount } else { other },
            memo: String::new(),
        },
    )
}

fn adjustment() -> impl Strategy<Value = AdjustmentInput> {
    (date(), account(), account(), amount()).prop_map(|(date, debit_account, credit_account, amount)| {
        AdjustmentInput {
            date,
            debit_account,
            credit_account,
            amount,
            memo: String::new(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Accepted pairs keep both journals balanced; rejected ones append nothing.
    #[test]
    fn prop_accepted_pairs_keep_journal_balanced(
        transactions in prop::collection::vec(transaction(), 0..30),
        adjustments in prop::collection::vec(adjustment(), 0..10),
    ) {
        let mut store = JournalStore::new();

        for input in transactions {
            let before = store.regular().len();
            let unbalanced = input.debit_amount != input.credit_amount;
            match store.record_transaction(input).map(<[_]>::len) {
                Ok(appended) => prop_assert_eq!(appended, 2),
                Err(err) => {
                    prop_assert!(unbalanced);
                    prop_assert!(
                        matches!(err, JournalError::UnbalancedEntry { .. }),
                        "unexpected error: {:?}",
                        err
                    );
                    prop_assert_eq!(store.regular().len(), before);
                }
            }
        }

        for input in adjustments {
            let before = store.adjusting().len();
            if store.record_adjustment(input).is_err() {
                prop_assert_eq!(store.adjusting().len(), before);
            }
        }

        prop_assert!(store.regular().totals().is_balanced);
        prop_assert!(store.adjusting().totals().is_balanced);
        prop_assert!(store.merged().totals().is_balanced);
        prop_assert_eq!(
            store.merged().len(),
            store.regular().len() + store.adjusting().len()
        );
    }

    /// Any debit amount different from the credit amount is rejected.
    #[test]
    fn prop_unbalanced_transaction_rejected(
        debit in amount(),
        credit in amount(),
    ) {
        prop_assume!(debit != credit);

        let mut store = JournalStore::new();
        let result = store.record_transaction(TransactionInput {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            debit_account: "Kas".to_string(),
            debit_amount: debit,
            credit_account: "Pendapatan".to_string(),
            credit_amount: credit,
            memo: String::new(),
        });

        prop_assert_eq!(result, Err(JournalError::UnbalancedEntry { debit, credit }));
        prop_assert!(store.regular().is_empty());
    }
}
