//! Session-scoped journal store.

use tracing::{debug, warn};

use super::entry::{Journal, JournalEntry, JournalKind};
use super::error::JournalError;
use super::types::{AdjustmentInput, TransactionInput};
use super::validation::{validate_adjustment, validate_transaction};

/// Append-only store holding the regular and adjusting journals of one session.
///
/// Created once per session and dropped when the session ends. There is no
/// update or delete; a rejected input leaves both journals untouched.
#[derive(Debug, Clone, Default)]
pub struct JournalStore {
    regular: Journal,
    adjusting: Journal,
}

impl JournalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a transaction and appends its debit and credit rows to the
    /// regular journal.
    ///
    /// Returns the two appended rows.
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if the amounts are negative or unbalanced.
    pub fn record_transaction(
        &mut self,
        input: TransactionInput,
    ) -> Result<&[JournalEntry], JournalError> {
        if let Err(err) = validate_transaction(&input) {
            warn!(code = err.error_code(), error = %err, "transaction rejected");
            return Err(err);
        }

        Ok(Self::append(&mut self.regular, JournalKind::Regular, input.into_pair()))
    }

    /// Validates an adjustment and appends its rows to the adjusting journal.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::IncompleteAdjustment` if an account is missing or
    /// the amount is not positive.
    pub fn record_adjustment(
        &mut self,
        input: AdjustmentInput,
    ) -> Result<&[JournalEntry], JournalError> {
        if let Err(err) = validate_adjustment(&input) {
            warn!(code = err.error_code(), error = %err, "adjustment rejected");
            return Err(err);
        }

        Ok(Self::append(&mut self.adjusting, JournalKind::Adjusting, input.into_pair()))
    }

    /// The regular journal in append order.
    #[must_use]
    pub fn regular(&self) -> &Journal {
        &self.regular
    }

    /// The adjusting journal in append order.
    #[must_use]
    pub fn adjusting(&self) -> &Journal {
        &self.adjusting
    }

    /// Regular journal followed by the adjusting journal.
    #[must_use]
    pub fn merged(&self) -> Journal {
        Journal::merge(&self.regular, &self.adjusting)
    }

    fn append(
        journal: &mut Journal,
        kind: JournalKind,
        pair: [JournalEntry; 2],
    ) -> &[JournalEntry] {
        let start = journal.len();
        debug!(
            journal = %kind,
            date = %pair[0].date,
            debit_account = %pair[0].account,
            credit_account = %pair[1].account,
            amount = %pair[0].debit,
            "journal pair appended"
        );
        journal.append(pair);
        &journal.entries()[start..]
    }
}
