//! Running balance calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running balance after one ledger row.
///
/// - `current_balance[N] = previous_balance[N] + mutation[N]`
/// - `previous_balance[N] = current_balance[N-1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    /// 1-based row position within the account.
    pub position: usize,
    /// Balance before this row.
    pub previous_balance: Decimal,
    /// Balance after this row.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Running balance for the first row of an account.
    #[must_use]
    pub fn first_row(mutation: Decimal) -> Self {
        Self {
            position: 1,
            previous_balance: Decimal::ZERO,
            current_balance: mutation,
        }
    }

    /// Running balance for the row after `previous`.
    #[must_use]
    pub fn next_row(previous: &Self, mutation: Decimal) -> Self {
        Self {
            position: previous.position + 1,
            previous_balance: previous.current_balance,
            current_balance: previous.current_balance + mutation,
        }
    }

    /// Folds a sequence of mutations into running balances.
    #[must_use]
    pub fn chain(mutations: impl IntoIterator<Item = Decimal>) -> Vec<Self> {
        let mut balances: Vec<Self> = Vec::new();
        for mutation in mutations {
            let next = match balances.last() {
                Some(previous) => Self::next_row(previous, mutation),
                None => Self::first_row(mutation),
            };
            balances.push(next);
        }
        balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// Strategy for generating mutations (can be positive or negative)
    fn mutation_strategy() -> impl Strategy<Value = Decimal> {
        (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The final balance equals the sum of all mutations.
        #[test]
        fn prop_final_balance_equals_sum_of_mutations(
            mutations in prop::collection::vec(mutation_strategy(), 1..=20),
        ) {
            let chain = RunningBalance::chain(mutations.iter().copied());
            let expected: Decimal = mutations.iter().copied().sum();
            prop_assert_eq!(chain.last().map(|b| b.current_balance), Some(expected));
        }

        /// Each row starts where the previous one ended.
        #[test]
        fn prop_previous_equals_prior_current(
            mutations in prop::collection::vec(mutation_strategy(), 2..=20),
        ) {
            let chain = RunningBalance::chain(mutations);
            for pair in chain.windows(2) {
                prop_assert_eq!(pair[1].previous_balance, pair[0].current_balance);
                prop_assert_eq!(pair[1].position, pair[0].position + 1);
            }
        }
    }

    #[test]
    fn test_running_balance_chain() {
        let rb1 = RunningBalance::first_row(dec!(100));
        assert_eq!(rb1.position, 1);
        assert_eq!(rb1.previous_balance, dec!(0));
        assert_eq!(rb1.current_balance, dec!(100));

        let rb2 = RunningBalance::next_row(&rb1, dec!(-30));
        assert_eq!(rb2.position, 2);
        assert_eq!(rb2.previous_balance, dec!(100));
        assert_eq!(rb2.current_balance, dec!(70));
    }

    #[test]
    fn test_empty_chain() {
        assert!(RunningBalance::chain(Vec::new()).is_empty());
    }
}
