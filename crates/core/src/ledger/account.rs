//! Per-account ledger types.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of an account's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Entry date.
    pub date: NaiveDate,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Entry memo.
    pub memo: String,
    /// Debit minus credit.
    pub mutation: Decimal,
    /// Cumulative mutation up to and including this row.
    pub balance: Decimal,
}

/// Date-ordered ledger of a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Account name.
    pub name: String,
    /// Rows sorted by date; equal dates keep journal order.
    pub rows: Vec<LedgerRow>,
}

impl LedgerAccount {
    /// The last running balance, or zero when the account has no rows.
    #[must_use]
    pub fn closing_balance(&self) -> Decimal {
        self.rows.last().map_or(Decimal::ZERO, |row| row.balance)
    }

    /// Sum of the debit column.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.rows.iter().map(|row| row.debit).sum()
    }

    /// Sum of the credit column.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.rows.iter().map(|row| row.credit).sum()
    }
}

/// All account ledgers derived from one journal.
///
/// Accounts keep the order in which they first appear in the journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralLedger {
    accounts: Vec<LedgerAccount>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GeneralLedger {
    pub(crate) fn from_accounts(accounts: Vec<LedgerAccount>) -> Self {
        let index = accounts
            .iter()
            .enumerate()
            .map(|(position, account)| (account.name.clone(), position))
            .collect();
        Self { accounts, index }
    }

    /// Looks up an account by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LedgerAccount> {
        self.index.get(name).map(|&position| &self.accounts[position])
    }

    /// Accounts in first-appearance order.
    #[must_use]
    pub fn accounts(&self) -> &[LedgerAccount] {
        &self.accounts
    }

    /// Iterates over accounts in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerAccount> {
        self.accounts.iter()
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account has any row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneralLedger {
    type Item = &'a LedgerAccount;
    type IntoIter = std::slice::Iter<'a, LedgerAccount>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
