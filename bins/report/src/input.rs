//! CSV journal input.
//!
//! Transactions: `date,debit_account,debit_amount,credit_account,credit_amount,memo`
//! Adjustments: `date,debit_account,credit_account,amount,memo`

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use siklus_core::journal::{AdjustmentInput, TransactionInput};

/// A CSV row that could not be turned into an input.
#[derive(Debug, Error)]
#[error("line {line}: {reason}")]
pub struct RowError {
    /// 1-based line number, header included.
    pub line: u64,
    /// What was wrong with the row.
    pub reason: String,
}

#[derive(Deserialize)]
struct TransactionRow {
    date: String,
    debit_account: String,
    debit_amount: String,
    credit_account: String,
    credit_amount: String,
    memo: Option<String>,
}

#[derive(Deserialize)]
struct AdjustmentRow {
    date: String,
    debit_account: String,
    credit_account: String,
    amount: String,
    memo: Option<String>,
}

/// Reads transaction rows; each row parses independently.
pub fn read_transactions<R: Read>(reader: R) -> Vec<Result<TransactionInput, RowError>> {
    read_rows(reader, |row: TransactionRow| {
        Ok(TransactionInput {
            date: parse_date(&row.date)?,
            debit_account: row.debit_account,
            debit_amount: parse_amount("debit_amount", &row.debit_amount)?,
            credit_account: row.credit_account,
            credit_amount: parse_amount("credit_amount", &row.credit_amount)?,
            memo: row.memo.unwrap_or_default(),
        })
    })
}

/// Reads adjustment rows; each row parses independently.
pub fn read_adjustments<R: Read>(reader: R) -> Vec<Result<AdjustmentInput, RowError>> {
    read_rows(reader, |row: AdjustmentRow| {
        Ok(AdjustmentInput {
            date: parse_date(&row.date)?,
            debit_account: row.debit_account,
            credit_account: row.credit_account,
            amount: parse_amount("amount", &row.amount)?,
            memo: row.memo.unwrap_or_default(),
        })
    })
}

fn read_rows<R, T, U>(
    reader: R,
    convert: impl Fn(T) -> Result<U, String>,
) -> Vec<Result<U, RowError>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    let headers = match rdr.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            return vec![Err(RowError {
                line: 1,
                reason: err.to_string(),
            })];
        }
    };

    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, csv::Position::line);
                let row = record
                    .deserialize::<T>(Some(&headers))
                    .map_err(|e| e.to_string())
                    .and_then(&convert)
                    .map_err(|reason| RowError { line, reason });
                rows.push(row);
            }
            Err(err) => {
                let line = err.position().map_or(0, csv::Position::line);
                rows.push(Err(RowError {
                    line,
                    reason: err.to_string(),
                }));
            }
        }
    }
    rows
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("date: {e}"))
}

fn parse_amount(field: &str, value: &str) -> Result<Decimal, String> {
    value.parse::<Decimal>().map_err(|e| format!("{field}: {e}"))
}
