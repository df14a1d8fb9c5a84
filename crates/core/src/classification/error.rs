//! Classification error types.

use siklus_shared::AppError;
use thiserror::Error;

/// Errors raised while building classifiers from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Category name is not one of the known categories.
    #[error("Unknown account category: {0}")]
    UnknownCategory(String),

    /// The same account is listed twice in the chart of accounts.
    #[error("Account listed twice in chart of accounts: {0}")]
    DuplicateAccount(String),
}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        Self::Configuration(err.to_string())
    }
}
