//! Journal error types.

use rust_decimal::Decimal;
use siklus_shared::AppError;
use thiserror::Error;

/// Errors raised when a transaction or adjustment is rejected.
///
/// Every variant is recoverable: the user corrects the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// Debit and credit amounts differ.
    #[error("Debit and credit amounts must be equal. Debit: {debit}, Credit: {credit}")]
    UnbalancedEntry {
        /// Debit amount entered.
        debit: Decimal,
        /// Credit amount entered.
        credit: Decimal,
    },

    /// An amount is below zero.
    #[error("Amounts cannot be negative")]
    NegativeAmount,

    /// Adjusting entry is missing an account or has no positive amount.
    #[error("Incomplete adjustment: {reason}")]
    IncompleteAdjustment {
        /// What is missing.
        reason: String,
    },
}

impl JournalError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::IncompleteAdjustment { .. } => "INCOMPLETE_ADJUSTMENT",
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        Self::Validation(err.to_string())
    }
}
