//! Trial balance calculation.

pub mod calculator;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::TrialBalanceCalculator;
pub use types::{TrialBalance, TrialBalanceRow, TrialBalanceTotals};
