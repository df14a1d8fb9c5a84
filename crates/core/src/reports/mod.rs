//! Financial report generation.
//!
//! This module provides pure business logic for the reports of the
//! accounting cycle:
//! - Income Statement
//! - Equity Statement
//! - Balance Sheet (with an unenforced equation check)
//! - Closing Entries

pub mod service;
pub mod types;


pub use service::{CLOSE_EXPENSE_MEMO, CLOSE_NET_INCOME_MEMO, CLOSE_REVENUE_MEMO, ReportEngine};
pub use types::*;
