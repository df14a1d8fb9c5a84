//! Business rule validation for journal input.

use rust_decimal::Decimal;

use super::error::JournalError;
use super::types::{AdjustmentInput, TransactionInput};

/// Validates a regular transaction.
///
/// Only the amounts are checked: they must not be negative and the debit
/// must equal the credit. Zero-amount transactions pass, as do blank account
/// names.
///
/// # Errors
///
/// Returns `JournalError::NegativeAmount` or `JournalError::UnbalancedEntry`.
pub fn validate_transaction(input: &TransactionInput) -> Result<(), JournalError> {
    if input.debit_amount < Decimal::ZERO || input.credit_amount < Decimal::ZERO {
        return Err(JournalError::NegativeAmount);
    }

    if input.debit_amount != input.credit_amount {
        return Err(JournalError::UnbalancedEntry {
            debit: input.debit_amount,
            credit: input.credit_amount,
        });
    }

    Ok(())
}

/// Validates an adjusting entry.
///
/// # Errors
///
/// Returns `JournalError::IncompleteAdjustment` if an account name is blank
/// or the amount is not positive.
pub fn validate_adjustment(input: &AdjustmentInput) -> Result<(), JournalError> {
    if input.amount <= Decimal::ZERO {
        return Err(JournalError::IncompleteAdjustment {
            reason: format!("amount must be positive, got {}", input.amount),
        });
    }

    if input.debit_account.trim().is_empty() {
        return Err(JournalError::IncompleteAdjustment {
            reason: "debit account is required".to_string(),
        });
    }

    if input.credit_account.trim().is_empty() {
        return Err(JournalError::IncompleteAdjustment {
            reason: "credit account is required".to_string(),
        });
    }

    Ok(())
}
