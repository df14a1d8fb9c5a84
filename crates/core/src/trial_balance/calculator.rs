//! Trial balance calculator.

use tracing::{debug, warn};

use super::types::{TrialBalance, TrialBalanceRow};
use crate::journal::Journal;
use crate::ledger::{GeneralLedger, LedgerBuilder};

/// Reduces a general ledger to one net balance per account.
pub struct TrialBalanceCalculator;

impl TrialBalanceCalculator {
    /// Calculates the trial balance of a ledger.
    ///
    /// Each account contributes its final running balance: a positive balance
    /// goes to the debit column, a negative one to the credit column.
    #[must_use]
    pub fn calculate(ledger: &GeneralLedger) -> TrialBalance {
        let rows = ledger
            .iter()
            .map(|account| TrialBalanceRow::from_balance(&account.name, account.closing_balance()))
            .collect();

        let trial_balance = TrialBalance::new(rows);
        if trial_balance.totals.is_balanced {
            debug!(
                accounts = trial_balance.rows.len(),
                total = %trial_balance.totals.total_debit,
                "trial balance calculated"
            );
        } else {
            warn!(
                total_debit = %trial_balance.totals.total_debit,
                total_credit = %trial_balance.totals.total_credit,
                "trial balance does not balance"
            );
        }
        trial_balance
    }

    /// Builds the ledger of `journal` and calculates its trial balance.
    #[must_use]
    pub fn from_journal(journal: &Journal) -> TrialBalance {
        Self::calculate(&LedgerBuilder::build(journal))
    }
}
