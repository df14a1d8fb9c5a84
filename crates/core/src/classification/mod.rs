//! Account classification.
//!
//! Accounts carry no type field; reports decide what an account is from its
//! name. Two classifiers are provided:
//! - `ClassificationRules` - ordered keyword rules, first match wins
//! - `ChartOfAccounts` - explicit categories, falling back to keyword rules

pub mod chart;
pub mod error;
pub mod rules;

pub use chart::ChartOfAccounts;
pub use error::ClassificationError;
pub use rules::{AccountCategory, AccountClassifier, ClassificationRule, ClassificationRules};
