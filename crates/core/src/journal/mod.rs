//! Journal recording.
//!
//! This module implements the input side of the accounting cycle:
//! - Journal entries and ordered journals
//! - Input types for transactions and adjustments
//! - Validation of balanced pairs
//! - The session-scoped, append-only journal store

pub mod entry;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{Journal, JournalEntry, JournalKind, JournalTotals};
pub use error::JournalError;
pub use store::JournalStore;
pub use types::{AdjustmentInput, TransactionInput};
pub use validation::{validate_adjustment, validate_transaction};
