//! General ledger derivation.

use std::collections::HashMap;

use tracing::debug;

use super::account::{GeneralLedger, LedgerAccount, LedgerRow};
use super::balance::RunningBalance;
use crate::journal::{Journal, JournalEntry};

/// Derives per-account ledgers from a journal.
///
/// Pure: the same journal always produces the same ledger.
pub struct LedgerBuilder;

impl LedgerBuilder {
    /// Builds the general ledger for `journal`.
    ///
    /// 1. Partitions entries by account, accounts in first-appearance order
    /// 2. Sorts each partition by date; the sort is stable, so entries with
    ///    the same date keep their journal order
    /// 3. Computes `mutation = debit - credit` and the running balance
    #[must_use]
    pub fn build(journal: &Journal) -> GeneralLedger {
        let mut order: Vec<&str> = Vec::new();
        let mut partitions: HashMap<&str, Vec<&JournalEntry>> = HashMap::new();

        for entry in journal {
            partitions
                .entry(entry.account.as_str())
                .or_insert_with(|| {
                    order.push(entry.account.as_str());
                    Vec::new()
                })
                .push(entry);
        }

        let accounts: Vec<LedgerAccount> = order
            .into_iter()
            .filter_map(|name| {
                partitions
                    .remove(name)
                    .map(|entries| Self::build_account(name, entries))
            })
            .collect();

        debug!(
            entries = journal.len(),
            accounts = accounts.len(),
            "general ledger built"
        );

        GeneralLedger::from_accounts(accounts)
    }

    fn build_account(name: &str, mut entries: Vec<&JournalEntry>) -> LedgerAccount {
        entries.sort_by_key(|entry| entry.date);

        let balances = RunningBalance::chain(entries.iter().map(|entry| entry.mutation()));
        let rows = entries
            .into_iter()
            .zip(balances)
            .map(|(entry, running)| LedgerRow {
                date: entry.date,
                debit: entry.debit,
                credit: entry.credit,
                memo: entry.memo.clone(),
                mutation: entry.mutation(),
                balance: running.current_balance,
            })
            .collect();

        LedgerAccount {
            name: name.to_string(),
            rows,
        }
    }
}
