//! Integration tests for the accounting cycle.
//!
//! Drives the public API from recording to export.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use siklus_core::AccountingCycle;
use calamine::{Reader, Xlsx, open_workbook};
use siklus_core::export::{
    JsonWorkbookWriter, Workbook, WorkbookBuilder, WorkbookWriter, XlsxWorkbookWriter,
};
use siklus_core::journal::{AdjustmentInput, JournalError, JournalStore, TransactionInput};
use siklus_core::reports::{EquityInputs, ReportEngine};
use siklus_core::trial_balance::{TrialBalanceCalculator, TrialBalanceRow};
use siklus_shared::AppConfig;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn transaction(
    date: NaiveDate,
    debit: &str,
    credit: &str,
    debit_amount: Decimal,
    credit_amount: Decimal,
) -> TransactionInput {
    TransactionInput {
        date,
        debit_account: debit.to_string(),
        debit_amount,
        credit_account: credit.to_string(),
        credit_amount,
        memo: String::new(),
    }
}

// ============================================================================
// Test: cash sale produces a one-sided trial balance per account
// ============================================================================

#[test]
fn test_cash_revenue_trial_balance() {
    let mut store = JournalStore::new();
    store
        .record_transaction(transaction(date(1, 1), "Cash", "Revenue", dec!(100), dec!(100)))
        .unwrap();

    let tb = TrialBalanceCalculator::from_journal(store.regular());
    assert_eq!(
        tb.rows,
        [
            TrialBalanceRow::from_balance("Cash", dec!(100)),
            TrialBalanceRow::from_balance("Revenue", dec!(-100)),
        ]
    );
    assert_eq!(tb.rows[1].credit, dec!(100));
}

// ============================================================================
// Test: revenue and expense flow into the income statement
// ============================================================================

#[test]
fn test_revenue_and_expense_income_statement() {
    let mut store = JournalStore::new();
    store
        .record_transaction(transaction(date(1, 1), "Cash", "Revenue", dec!(200), dec!(200)))
        .unwrap();
    store
        .record_transaction(transaction(date(1, 2), "Expense", "Cash", dec!(50), dec!(50)))
        .unwrap();

    let report = AccountingCycle::default().run(&store, EquityInputs::default());
    assert_eq!(report.adjusted_trial_balance.balance_of("Cash"), dec!(150));
    assert_eq!(report.income_statement.revenue, dec!(200));
    assert_eq!(report.income_statement.expense, dec!(50));
    assert_eq!(report.income_statement.net_income, dec!(150));
}

// ============================================================================
// Test: unbalanced input is rejected and leaves the journal unchanged
// ============================================================================

#[test]
fn test_unbalanced_transaction_rejected() {
    let mut store = JournalStore::new();
    let err = store
        .record_transaction(transaction(date(1, 1), "Cash", "Revenue", dec!(100), dec!(90)))
        .unwrap_err();

    assert_eq!(
        err,
        JournalError::UnbalancedEntry {
            debit: dec!(100),
            credit: dec!(90),
        }
    );
    assert!(store.regular().is_empty());
}

// ============================================================================
// Test: a month of activity through closing and export
// ============================================================================

#[test]
fn test_month_end_close_and_export() {
    let mut store = JournalStore::new();
    let transactions = [
        (date(3, 1), "Kas", "Modal", dec!(10000)),
        (date(3, 2), "Perlengkapan", "Kas", dec!(800)),
        (date(3, 5), "Piutang Usaha", "Pendapatan Jasa", dec!(2500)),
        (date(3, 10), "Kas", "Piutang Usaha", dec!(1500)),
        (date(3, 15), "Beban Gaji", "Kas", dec!(1200)),
        (date(3, 20), "Kas", "Utang Bank", dec!(3000)),
    ];
    for (day, debit, credit, amount) in transactions {
        store
            .record_transaction(transaction(day, debit, credit, amount, amount))
            .unwrap();
    }
    store
        .record_adjustment(AdjustmentInput {
            date: date(3, 31),
            debit_account: "Beban Perlengkapan".to_string(),
            credit_account: "Perlengkapan".to_string(),
            amount: dec!(300),
            memo: "Supplies used".to_string(),
        })
        .unwrap();

    let engine = ReportEngine::from_config(&AppConfig::default()).unwrap();
    let report = AccountingCycle::new(engine).run(&store, EquityInputs::new(dec!(10000), dec!(0)));

    assert!(report.opening_trial_balance.totals.is_balanced);
    assert!(report.adjusted_trial_balance.totals.is_balanced);
    assert_eq!(report.adjusted_trial_balance.balance_of("Perlengkapan"), dec!(500));
    assert_eq!(report.income_statement.net_income, dec!(1000));
    assert_eq!(report.equity_statement.ending_equity, dec!(11000));

    // "Perlengkapan" matches no keyword, so it stays off the balance sheet.
    assert_eq!(report.balance_sheet.total_assets, dec!(13500));
    assert_eq!(report.balance_sheet.liabilities_and_equity, dec!(14000));
    assert!(report.balance_warning.is_some());

    assert_eq!(report.closing_date, date(3, 31));
    for account in ["Pendapatan Jasa", "Beban Gaji", "Beban Perlengkapan", "Ikhtisar Laba Rugi"] {
        assert_eq!(report.final_trial_balance.balance_of(account), Decimal::ZERO);
    }
    assert_eq!(report.final_trial_balance.balance_of("Modal"), dec!(-11000));

    let workbook = WorkbookBuilder::from_cycle(&report);
    assert_eq!(workbook.len(), 9 + report.adjusted_ledger.len());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("laporan.json");
    JsonWorkbookWriter::new(&path).write(&workbook).unwrap();
    let parsed: Workbook =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, workbook);

    let xlsx_path = dir.path().join("laporan.xlsx");
    XlsxWorkbookWriter::new(&xlsx_path).write(&workbook).unwrap();
    let xlsx: Xlsx<_> = open_workbook(&xlsx_path).unwrap();
    let expected: Vec<&str> = workbook.sheet_names().collect();
    assert_eq!(xlsx.sheet_names(), expected);
}
