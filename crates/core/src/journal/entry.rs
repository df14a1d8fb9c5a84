//! Journal entry domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which sub-journal a set of entries belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalKind {
    /// Transactions recorded during the period.
    Regular,
    /// Adjustments recorded before closing.
    Adjusting,
    /// Synthetic entries that zero the temporary accounts.
    Closing,
}

impl std::fmt::Display for JournalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Adjusting => write!(f, "adjusting"),
            Self::Closing => write!(f, "closing"),
        }
    }
}

/// A single journal row: one account, one side of a transaction.
///
/// Rows are only ever created in balanced pairs and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Transaction date.
    pub date: NaiveDate,
    /// Account name.
    pub account: String,
    /// Debit amount (zero on a credit row).
    pub debit: Decimal,
    /// Credit amount (zero on a debit row).
    pub credit: Decimal,
    /// Free-form description shared by both rows of the transaction.
    pub memo: String,
}

impl JournalEntry {
    /// Creates a debit row.
    #[must_use]
    pub fn debit(
        date: NaiveDate,
        account: impl Into<String>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date,
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
            memo: memo.into(),
        }
    }

    /// Creates a credit row.
    #[must_use]
    pub fn credit(
        date: NaiveDate,
        account: impl Into<String>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date,
            account: account.into(),
            debit: Decimal::ZERO,
            credit: amount,
            memo: memo.into(),
        }
    }

    /// Returns the signed movement of this row (debit minus credit).
    #[must_use]
    pub fn mutation(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Debit and credit sums of a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTotals {
    /// Sum of all debit amounts.
    pub total_debit: Decimal,
    /// Sum of all credit amounts.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

impl JournalTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}

/// An ordered sequence of journal entries.
///
/// Insertion order is append order; a journal is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenates two journals, `first` before `second`.
    ///
    /// Entries are copied as they are; nothing is re-validated.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        Self::concat([first, second])
    }

    /// Concatenates any number of journals in the given order.
    #[must_use]
    pub fn concat<'a>(journals: impl IntoIterator<Item = &'a Self>) -> Self {
        let entries = journals
            .into_iter()
            .flat_map(|journal| journal.entries.iter().cloned())
            .collect();
        Self { entries }
    }

    /// Returns the entries in append order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Iterates over the entries in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.entries.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the journal has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest entry date, if any.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.entries.iter().map(|e| e.date).max()
    }

    /// Sums the debit and credit columns.
    #[must_use]
    pub fn totals(&self) -> JournalTotals {
        let total_debit: Decimal = self.entries.iter().map(|e| e.debit).sum();
        let total_credit: Decimal = self.entries.iter().map(|e| e.credit).sum();
        JournalTotals::new(total_debit, total_credit)
    }

    /// Appends rows. Only the store and the closing generator call this.
    pub(crate) fn append(&mut self, rows: impl IntoIterator<Item = JournalEntry>) {
        self.entries.extend(rows);
    }
}

impl FromIterator<JournalEntry> for Journal {
    fn from_iter<I: IntoIterator<Item = JournalEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a JournalEntry;
    type IntoIter = std::slice::Iter<'a, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
