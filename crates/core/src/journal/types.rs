//! Input types for recording journal transactions.
//!
//! These mirror the two input forms of the bookkeeping workflow: a regular
//! transaction with separate debit and credit amounts, and an adjusting entry
//! with a single amount.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// Input for a regular two-line transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction date.
    pub date: NaiveDate,
    /// Account to debit.
    pub debit_account: String,
    /// Amount to debit.
    pub debit_amount: Decimal,
    /// Account to credit.
    pub credit_account: String,
    /// Amount to credit (must equal the debit amount).
    pub credit_amount: Decimal,
    /// Description of the transaction.
    #[serde(default)]
    pub memo: String,
}

impl TransactionInput {
    /// Creates an input dated today, the form's default date.
    #[must_use]
    pub fn today(
        debit_account: impl Into<String>,
        debit_amount: Decimal,
        credit_account: impl Into<String>,
        credit_amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date: Local::now().date_naive(),
            debit_account: debit_account.into(),
            debit_amount,
            credit_account: credit_account.into(),
            credit_amount,
            memo: memo.into(),
        }
    }

    /// Builds the debit row and the credit row, in that order.
    pub(crate) fn into_pair(self) -> [JournalEntry; 2] {
        [
            JournalEntry::debit(self.date, self.debit_account, self.debit_amount, self.memo.clone()),
            JournalEntry::credit(self.date, self.credit_account, self.credit_amount, self.memo),
        ]
    }
}

/// Input for an adjusting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentInput {
    /// Adjustment date.
    pub date: NaiveDate,
    /// Account to debit.
    pub debit_account: String,
    /// Account to credit.
    pub credit_account: String,
    /// Amount posted to both sides.
    pub amount: Decimal,
    /// Description of the adjustment.
    #[serde(default)]
    pub memo: String,
}

impl AdjustmentInput {
    /// Creates an input dated today, the form's default date.
    #[must_use]
    pub fn today(
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date: Local::now().date_naive(),
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            amount,
            memo: memo.into(),
        }
    }

    pub(crate) fn into_pair(self) -> [JournalEntry; 2] {
        [
            JournalEntry::debit(self.date, self.debit_account, self.amount, self.memo.clone()),
            JournalEntry::credit(self.date, self.credit_account, self.amount, self.memo),
        ]
    }
}
