//! Lays cycle outputs out as sheets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use siklus_shared::types::format_amount;

use super::sheet_name::ledger_sheet_name;
use super::workbook::{Sheet, Workbook};
use crate::cycle::CycleReport;
use crate::journal::Journal;
use crate::ledger::LedgerAccount;
use crate::trial_balance::TrialBalance;

const JOURNAL_HEADERS: [&str; 5] = ["Date", "Account", "Debit", "Credit", "Memo"];
const TRIAL_BALANCE_HEADERS: [&str; 3] = ["Account", "Debit", "Credit"];
const LEDGER_HEADERS: [&str; 7] = [
    "Date", "Account", "Debit", "Credit", "Memo", "Mutation", "Balance",
];
const SUMMARY_HEADERS: [&str; 2] = ["Description", "Amount"];

/// Builds workbooks from cycle reports.
pub struct WorkbookBuilder;

impl WorkbookBuilder {
    /// Lays a cycle report out as a workbook.
    ///
    /// Sheet order: journals and trial balances in cycle order, the three
    /// statements, then one ledger sheet per account of the adjusted ledger.
    #[must_use]
    pub fn from_cycle(report: &CycleReport) -> Workbook {
        let mut workbook = Workbook::new();

        workbook.push(Self::journal_sheet("General Journal", &report.general_journal));
        workbook.push(Self::journal_sheet("Adjusting Journal", &report.adjusting_journal));
        workbook.push(Self::trial_balance_sheet(
            "Opening Trial Balance",
            &report.opening_trial_balance,
        ));
        workbook.push(Self::trial_balance_sheet(
            "Adjusted Trial Balance",
            &report.adjusted_trial_balance,
        ));
        workbook.push(Self::journal_sheet("Closing Entries", &report.closing_entries));
        workbook.push(Self::trial_balance_sheet(
            "Post-Closing Trial Balance",
            &report.final_trial_balance,
        ));

        let income = &report.income_statement;
        workbook.push(Self::summary_sheet(
            "Income Statement",
            &[
                ("Revenue", income.revenue),
                ("Expense", income.expense),
                ("Net Income", income.net_income),
            ],
        ));

        let equity = &report.equity_statement;
        workbook.push(Self::summary_sheet(
            "Equity Statement",
            &[
                ("Opening Equity", equity.opening_equity),
                ("Net Income", equity.net_income),
                ("Withdrawals", equity.withdrawals),
                ("Ending Equity", equity.ending_equity),
            ],
        ));

        let sheet = &report.balance_sheet;
        workbook.push(Self::summary_sheet(
            "Balance Sheet",
            &[
                ("Total Assets", sheet.total_assets),
                ("Total Liabilities + Equity", sheet.liabilities_and_equity),
            ],
        ));

        for account in &report.adjusted_ledger {
            workbook.push(Self::ledger_sheet(account));
        }

        workbook
    }

    fn journal_sheet(name: &str, journal: &Journal) -> Sheet {
        let mut sheet = Sheet::new(name, &JOURNAL_HEADERS);
        for entry in journal {
            sheet.push_row(vec![
                iso_date(entry.date),
                entry.account.clone(),
                format_amount(entry.debit),
                format_amount(entry.credit),
                entry.memo.clone(),
            ]);
        }
        sheet
    }

    fn trial_balance_sheet(name: &str, trial_balance: &TrialBalance) -> Sheet {
        let mut sheet = Sheet::new(name, &TRIAL_BALANCE_HEADERS);
        for row in &trial_balance.rows {
            sheet.push_row(vec![
                row.account.clone(),
                format_amount(row.debit),
                format_amount(row.credit),
            ]);
        }
        sheet
    }

    fn summary_sheet(name: &str, lines: &[(&str, Decimal)]) -> Sheet {
        let mut sheet = Sheet::new(name, &SUMMARY_HEADERS);
        for (label, amount) in lines {
            sheet.push_row(vec![(*label).to_string(), format_amount(*amount)]);
        }
        sheet
    }

    fn ledger_sheet(account: &LedgerAccount) -> Sheet {
        let mut sheet = Sheet::new(&ledger_sheet_name(&account.name), &LEDGER_HEADERS);
        for row in &account.rows {
            sheet.push_row(vec![
                iso_date(row.date),
                account.name.clone(),
                format_amount(row.debit),
                format_amount(row.credit),
                row.memo.clone(),
                format_amount(row.mutation),
                format_amount(row.balance),
            ]);
        }
        sheet
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
