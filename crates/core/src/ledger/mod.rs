//! General ledger derivation.
//!
//! Groups journal entries by account, orders them by date and carries a
//! running balance per account. Recomputed from scratch on every request.

pub mod account;
pub mod balance;
pub mod builder;

pub use account::{GeneralLedger, LedgerAccount, LedgerRow};
pub use balance::RunningBalance;
pub use builder::LedgerBuilder;
