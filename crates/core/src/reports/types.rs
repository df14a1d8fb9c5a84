//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use siklus_shared::config::{ClosingConfig, ReportConfig};

/// One account's contribution to a report figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account name.
    pub account: String,
    /// Amount taken from the trial balance.
    pub amount: Decimal,
}

/// Income statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Revenue accounts with a credit balance.
    pub revenue_lines: Vec<StatementLine>,
    /// Expense accounts with a debit balance.
    pub expense_lines: Vec<StatementLine>,
    /// Total revenue.
    pub revenue: Decimal,
    /// Total expense.
    pub expense: Decimal,
    /// Revenue minus expense.
    pub net_income: Decimal,
}

/// Owner-supplied equity statement inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityInputs {
    /// Equity at the start of the period.
    pub opening_equity: Decimal,
    /// Owner withdrawals (drawings).
    pub withdrawals: Decimal,
}

impl EquityInputs {
    /// Creates equity inputs.
    #[must_use]
    pub const fn new(opening_equity: Decimal, withdrawals: Decimal) -> Self {
        Self {
            opening_equity,
            withdrawals,
        }
    }
}

impl From<&ReportConfig> for EquityInputs {
    fn from(config: &ReportConfig) -> Self {
        Self::new(config.opening_equity, config.withdrawals)
    }
}

/// Statement of changes in equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityStatement {
    /// Equity at the start of the period.
    pub opening_equity: Decimal,
    /// Net income of the period.
    pub net_income: Decimal,
    /// Owner withdrawals.
    pub withdrawals: Decimal,
    /// Opening equity plus net income minus withdrawals.
    pub ending_equity: Decimal,
}

/// Balance sheet.
///
/// The accounting equation is checked but never enforced: a sheet whose sides
/// differ is still produced and carries a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Asset accounts with a debit balance.
    pub asset_lines: Vec<StatementLine>,
    /// Liability accounts with a credit balance.
    pub liability_lines: Vec<StatementLine>,
    /// Equity accounts with a credit balance, as recorded in the trial balance.
    pub equity_lines: Vec<StatementLine>,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Ending equity from the equity statement.
    pub ending_equity: Decimal,
    /// Liabilities plus ending equity.
    pub liabilities_and_equity: Decimal,
    /// Total assets minus liabilities and equity.
    pub difference: Decimal,
    /// Whether the difference is within the rounding tolerance.
    pub is_balanced: bool,
    /// Tolerance used for `is_balanced`.
    pub tolerance: Decimal,
}

impl BalanceSheet {
    /// Returns a warning when the two sides diverge beyond the tolerance.
    #[must_use]
    pub fn balance_warning(&self) -> Option<BalanceSheetWarning> {
        (!self.is_balanced).then(|| BalanceSheetWarning {
            total_assets: self.total_assets,
            liabilities_and_equity: self.liabilities_and_equity,
            difference: self.difference,
            tolerance: self.tolerance,
        })
    }
}

/// Assets do not equal liabilities plus equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetWarning {
    /// Total assets.
    pub total_assets: Decimal,
    /// Liabilities plus ending equity.
    pub liabilities_and_equity: Decimal,
    /// Total assets minus liabilities and equity.
    pub difference: Decimal,
    /// Tolerance that was exceeded.
    pub tolerance: Decimal,
}

impl std::fmt::Display for BalanceSheetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Balance sheet does not balance: assets {} vs liabilities + equity {} (difference {}, tolerance {})",
            self.total_assets, self.liabilities_and_equity, self.difference, self.tolerance
        )
    }
}

/// Accounts the closing entries post to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingAccounts {
    /// Clearing account (income summary).
    pub clearing_account: String,
    /// Equity account receiving net income.
    pub equity_account: String,
}

impl Default for ClosingAccounts {
    fn default() -> Self {
        Self::from(&ClosingConfig::default())
    }
}

impl From<&ClosingConfig> for ClosingAccounts {
    fn from(config: &ClosingConfig) -> Self {
        Self {
            clearing_account: config.clearing_account.clone(),
            equity_account: config.equity_account.clone(),
        }
    }
}
