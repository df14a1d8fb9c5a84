//! The full accounting cycle.
//!
//! Runs every stage from the recorded journals to the post-closing trial
//! balance. Nothing is cached: each run recomputes all outputs from the store.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classification::{AccountClassifier, ClassificationRules};
use crate::journal::{Journal, JournalStore};
use crate::ledger::{GeneralLedger, LedgerBuilder};
use crate::reports::{
    BalanceSheet, BalanceSheetWarning, EquityInputs, EquityStatement, IncomeStatement,
    ReportEngine,
};
use crate::trial_balance::{TrialBalance, TrialBalanceCalculator};

/// Every output of one cycle run, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Regular transactions.
    pub general_journal: Journal,
    /// Ledger of the regular transactions.
    pub general_ledger: GeneralLedger,
    /// Trial balance before adjustments.
    pub opening_trial_balance: TrialBalance,
    /// Adjusting entries.
    pub adjusting_journal: Journal,
    /// Ledger of regular and adjusting entries.
    pub adjusted_ledger: GeneralLedger,
    /// Trial balance after adjustments.
    pub adjusted_trial_balance: TrialBalance,
    /// Income statement of the adjusted trial balance.
    pub income_statement: IncomeStatement,
    /// Equity statement.
    pub equity_statement: EquityStatement,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Set when the balance sheet does not balance.
    pub balance_warning: Option<BalanceSheetWarning>,
    /// Date the closing entries carry.
    pub closing_date: NaiveDate,
    /// Closing entries.
    pub closing_entries: Journal,
    /// Trial balance after closing.
    pub final_trial_balance: TrialBalance,
}

/// Drives the report engine over a journal store.
#[derive(Debug, Clone)]
pub struct AccountingCycle<C = ClassificationRules> {
    engine: ReportEngine<C>,
}

impl Default for AccountingCycle {
    fn default() -> Self {
        Self::new(ReportEngine::default())
    }
}

impl<C: AccountClassifier> AccountingCycle<C> {
    /// Creates a cycle around a report engine.
    #[must_use]
    pub fn new(engine: ReportEngine<C>) -> Self {
        Self { engine }
    }

    /// Returns the report engine.
    pub fn engine(&self) -> &ReportEngine<C> {
        &self.engine
    }

    /// Runs the cycle.
    ///
    /// Reports are produced even when the journals do not balance; the
    /// imbalance is logged instead.
    #[must_use]
    pub fn run(&self, store: &JournalStore, equity_inputs: EquityInputs) -> CycleReport {
        let general_journal = store.regular().clone();
        let general_ledger = LedgerBuilder::build(&general_journal);
        let opening_trial_balance = TrialBalanceCalculator::calculate(&general_ledger);
        debug!(accounts = general_ledger.len(), "opening trial balance ready");

        let adjusting_journal = store.adjusting().clone();
        let merged = Journal::merge(&general_journal, &adjusting_journal);
        let totals = merged.totals();
        if !totals.is_balanced {
            warn!(
                total_debit = %totals.total_debit,
                total_credit = %totals.total_credit,
                "merged journal does not balance"
            );
        }
        let adjusted_ledger = LedgerBuilder::build(&merged);
        let adjusted_trial_balance = TrialBalanceCalculator::calculate(&adjusted_ledger);

        let income_statement = self.engine.income_statement(&adjusted_trial_balance);
        let equity_statement = self
            .engine
            .equity_statement(&income_statement, equity_inputs);
        let balance_sheet = self
            .engine
            .balance_sheet(&adjusted_trial_balance, &equity_statement);
        let balance_warning = balance_sheet.balance_warning();

        let closing_date = merged
            .latest_date()
            .unwrap_or_else(|| Local::now().date_naive());
        let closing_entries = self
            .engine
            .closing_entries(&adjusted_trial_balance, closing_date);
        let final_trial_balance = self
            .engine
            .final_trial_balance(&merged, &closing_entries);

        info!(
            regular = general_journal.len(),
            adjusting = adjusting_journal.len(),
            closing = closing_entries.len(),
            net_income = %income_statement.net_income,
            "accounting cycle complete"
        );

        CycleReport {
            general_journal,
            general_ledger,
            opening_trial_balance,
            adjusting_journal,
            adjusted_ledger,
            adjusted_trial_balance,
            income_statement,
            equity_statement,
            balance_sheet,
            balance_warning,
            closing_date,
            closing_entries,
            final_trial_balance,
        }
    }
}
