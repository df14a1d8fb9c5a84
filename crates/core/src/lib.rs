//! Core accounting-cycle logic for Siklus.
//!
//! This crate contains pure business logic with no I/O outside the export
//! writers. Every report is recomputed from the recorded journals on request.
//!
//! # Modules
//!
//! - `journal` - Balanced two-line journal entries and the session store
//! - `ledger` - Per-account ledgers with running balances
//! - `trial_balance` - Net debit/credit balance per account
//! - `classification` - Name-based account categories
//! - `reports` - Income statement, equity statement, balance sheet, closing entries
//! - `cycle` - The full cycle from journals to the post-closing trial balance
//! - `export` - Workbook layout and CSV/JSON writers

pub mod classification;
pub mod cycle;
pub mod export;
pub mod journal;
pub mod ledger;
pub mod reports;
pub mod trial_balance;

pub use cycle::{AccountingCycle, CycleReport};
