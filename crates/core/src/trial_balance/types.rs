//! Trial balance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net balance of one account.
///
/// At most one of `debit` and `credit` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account name.
    pub account: String,
    /// Net debit balance.
    pub debit: Decimal,
    /// Net credit balance.
    pub credit: Decimal,
}

impl TrialBalanceRow {
    /// Builds a row from a signed balance (positive is debit).
    #[must_use]
    pub fn from_balance(account: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: balance.max(Decimal::ZERO),
            credit: (-balance).max(Decimal::ZERO),
        }
    }

    /// Signed balance, debit minus credit.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Snapshot of every account's net balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Rows in ledger account order.
    pub rows: Vec<TrialBalanceRow>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalance {
    /// Creates a trial balance and computes its totals.
    #[must_use]
    pub fn new(rows: Vec<TrialBalanceRow>) -> Self {
        let total_debit: Decimal = rows.iter().map(|r| r.debit).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.credit).sum();

        Self {
            rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Looks up the row of an account.
    #[must_use]
    pub fn row(&self, account: &str) -> Option<&TrialBalanceRow> {
        self.rows.iter().find(|r| r.account == account)
    }

    /// Signed balance of an account, zero when it is absent.
    #[must_use]
    pub fn balance_of(&self, account: &str) -> Decimal {
        self.row(account).map_or(Decimal::ZERO, TrialBalanceRow::balance)
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
