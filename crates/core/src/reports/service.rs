//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use siklus_shared::AppConfig;
use siklus_shared::types::within_tolerance;
use tracing::{debug, warn};

use super::types::{
    BalanceSheet, ClosingAccounts, EquityInputs, EquityStatement, IncomeStatement, StatementLine,
};
use crate::classification::{
    AccountCategory, AccountClassifier, ChartOfAccounts, ClassificationError, ClassificationRules,
};
use crate::journal::{Journal, JournalEntry};
use crate::trial_balance::{TrialBalance, TrialBalanceCalculator, TrialBalanceRow};

/// Memo of the rows closing the revenue accounts.
pub const CLOSE_REVENUE_MEMO: &str = "Closing revenue";
/// Memo of the rows closing the expense accounts.
pub const CLOSE_EXPENSE_MEMO: &str = "Closing expenses";
/// Memo of the rows moving net income into equity.
pub const CLOSE_NET_INCOME_MEMO: &str = "Closing net income to equity";

/// Derives financial statements and closing entries from trial balances.
#[derive(Debug, Clone)]
pub struct ReportEngine<C = ClassificationRules> {
    classifier: C,
    closing: ClosingAccounts,
    balance_tolerance: Decimal,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new(ClassificationRules::default(), ClosingAccounts::default())
    }
}

impl ReportEngine<ChartOfAccounts> {
    /// Builds an engine from the classification, closing and report sections.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClassificationError> {
        let classifier = ChartOfAccounts::from_config(&config.classification)?;
        Ok(Self::new(classifier, ClosingAccounts::from(&config.closing))
            .with_balance_tolerance(config.report.balance_tolerance))
    }
}

impl<C: AccountClassifier> ReportEngine<C> {
    /// Creates an engine with the default balance tolerance of 0.01.
    ///
    /// Logs a warning when the equity account is not classified as equity.
    #[must_use]
    pub fn new(classifier: C, closing: ClosingAccounts) -> Self {
        if !classifier.is(&closing.equity_account, AccountCategory::Equity) {
            warn!(
                account = %closing.equity_account,
                "closing equity account is not classified as equity"
            );
        }
        Self {
            classifier,
            closing,
            balance_tolerance: Decimal::new(1, 2),
        }
    }

    /// Sets the largest balance sheet difference still treated as balanced.
    #[must_use]
    pub fn with_balance_tolerance(mut self, tolerance: Decimal) -> Self {
        self.balance_tolerance = tolerance.abs();
        self
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Returns the closing accounts.
    pub fn closing_accounts(&self) -> &ClosingAccounts {
        &self.closing
    }

    /// Generates the income statement.
    ///
    /// Revenue is the credit column of revenue accounts, expense the debit
    /// column of expense accounts.
    #[must_use]
    pub fn income_statement(&self, trial_balance: &TrialBalance) -> IncomeStatement {
        let revenue_lines =
            self.lines(trial_balance, AccountCategory::Revenue, |row| row.credit);
        let expense_lines =
            self.lines(trial_balance, AccountCategory::Expense, |row| row.debit);

        let revenue: Decimal = revenue_lines.iter().map(|l| l.amount).sum();
        let expense: Decimal = expense_lines.iter().map(|l| l.amount).sum();
        let net_income = revenue - expense;

        debug!(%revenue, %expense, %net_income, "income statement generated");

        IncomeStatement {
            revenue_lines,
            expense_lines,
            revenue,
            expense,
            net_income,
        }
    }

    /// Generates the equity statement.
    #[must_use]
    pub fn equity_statement(
        &self,
        income: &IncomeStatement,
        inputs: EquityInputs,
    ) -> EquityStatement {
        EquityStatement {
            opening_equity: inputs.opening_equity,
            net_income: income.net_income,
            withdrawals: inputs.withdrawals,
            ending_equity: inputs.opening_equity + income.net_income - inputs.withdrawals,
        }
    }

    /// Generates the balance sheet.
    ///
    /// The sheet is always produced; when assets and liabilities plus equity
    /// differ beyond the tolerance it is flagged and a warning is logged.
    /// Equity lines are listed for display only; the equation uses the
    /// ending equity of the equity statement.
    #[must_use]
    pub fn balance_sheet(
        &self,
        trial_balance: &TrialBalance,
        equity: &EquityStatement,
    ) -> BalanceSheet {
        let asset_lines = self.lines(trial_balance, AccountCategory::Asset, |row| row.debit);
        let liability_lines =
            self.lines(trial_balance, AccountCategory::Liability, |row| row.credit);
        let equity_lines = self.lines(trial_balance, AccountCategory::Equity, |row| row.credit);

        let total_assets: Decimal = asset_lines.iter().map(|l| l.amount).sum();
        let total_liabilities: Decimal = liability_lines.iter().map(|l| l.amount).sum();
        let liabilities_and_equity = total_liabilities + equity.ending_equity;
        let difference = total_assets - liabilities_and_equity;
        let is_balanced =
            within_tolerance(total_assets, liabilities_and_equity, self.balance_tolerance);

        let sheet = BalanceSheet {
            asset_lines,
            liability_lines,
            equity_lines,
            total_assets,
            total_liabilities,
            ending_equity: equity.ending_equity,
            liabilities_and_equity,
            difference,
            is_balanced,
            tolerance: self.balance_tolerance,
        };

        if let Some(warning) = sheet.balance_warning() {
            warn!(
                total_assets = %warning.total_assets,
                liabilities_and_equity = %warning.liabilities_and_equity,
                difference = %warning.difference,
                "{warning}"
            );
        }
        sheet
    }

    /// Generates the closing entries for a trial balance.
    ///
    /// Every revenue and expense account is closed by its full signed
    /// balance into the clearing account, contra balances included. The
    /// resulting clearing balance is then moved to the equity account. Every
    /// row is dated `date`. The returned journal is synthetic and is not
    /// recorded anywhere.
    #[must_use]
    pub fn closing_entries(&self, trial_balance: &TrialBalance, date: NaiveDate) -> Journal {
        let clearing = self.closing.clearing_account.as_str();
        let equity = self.closing.equity_account.as_str();
        let revenue_rows = self.temporary_rows(trial_balance, AccountCategory::Revenue);
        let expense_rows = self.temporary_rows(trial_balance, AccountCategory::Expense);
        let mut journal = Journal::new();

        // Net credit taken out of the revenue accounts.
        let revenue: Decimal = revenue_rows.iter().map(|row| -row.balance()).sum();
        journal.append(
            revenue_rows
                .iter()
                .filter_map(|row| {
                    posting(date, &row.account, -row.balance(), CLOSE_REVENUE_MEMO)
                }),
        );
        journal.append(posting(date, clearing, -revenue, CLOSE_REVENUE_MEMO));

        // Net debit taken out of the expense accounts.
        let expense: Decimal = expense_rows.iter().map(|row| row.balance()).sum();
        journal.append(posting(date, clearing, expense, CLOSE_EXPENSE_MEMO));
        journal.append(
            expense_rows
                .iter()
                .filter_map(|row| {
                    posting(date, &row.account, -row.balance(), CLOSE_EXPENSE_MEMO)
                }),
        );

        // Negative is a credit balance, i.e. a profit.
        let clearing_balance = trial_balance.balance_of(clearing) + expense - revenue;
        if clearing_balance < Decimal::ZERO {
            journal.append(posting(date, clearing, -clearing_balance, CLOSE_NET_INCOME_MEMO));
            journal.append(posting(date, equity, clearing_balance, CLOSE_NET_INCOME_MEMO));
        } else {
            journal.append(posting(date, equity, clearing_balance, CLOSE_NET_INCOME_MEMO));
            journal.append(posting(date, clearing, -clearing_balance, CLOSE_NET_INCOME_MEMO));
        }

        debug!(rows = journal.len(), %date, "closing entries generated");
        journal
    }

    /// Calculates the post-closing trial balance of a journal and its closing entries.
    #[must_use]
    pub fn final_trial_balance(&self, journal: &Journal, closing: &Journal) -> TrialBalance {
        TrialBalanceCalculator::from_journal(&Journal::merge(journal, closing))
    }

    /// Revenue or expense rows with a non-zero balance, clearing account excluded.
    fn temporary_rows<'a>(
        &self,
        trial_balance: &'a TrialBalance,
        category: AccountCategory,
    ) -> Vec<&'a TrialBalanceRow> {
        trial_balance
            .rows
            .iter()
            .filter(|row| row.account != self.closing.clearing_account)
            .filter(|row| !row.balance().is_zero())
            .filter(|row| self.classifier.is(&row.account, category))
            .collect()
    }

    fn lines(
        &self,
        trial_balance: &TrialBalance,
        category: AccountCategory,
        column: impl Fn(&TrialBalanceRow) -> Decimal,
    ) -> Vec<StatementLine> {
        trial_balance
            .rows
            .iter()
            .filter(|row| self.classifier.is(&row.account, category))
            .filter_map(|row| {
                let amount = column(row);
                (!amount.is_zero()).then(|| StatementLine {
                    account: row.account.clone(),
                    amount,
                })
            })
            .collect()
    }
}

/// One closing row moving `amount` (positive debits, negative credits), or
/// nothing when it is zero.
fn posting(
    date: NaiveDate,
    account: &str,
    amount: Decimal,
    memo: &str,
) -> Option<JournalEntry> {
    if amount > Decimal::ZERO {
        Some(JournalEntry::debit(date, account, amount, memo))
    } else if amount < Decimal::ZERO {
        Some(JournalEntry::credit(date, account, -amount, memo))
    } else {
        None
    }
}
