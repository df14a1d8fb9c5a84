//! Structured chart of accounts with keyword fallback.

use std::collections::HashMap;

use siklus_shared::config::ClassificationConfig;

use super::error::ClassificationError;
use super::rules::{AccountCategory, AccountClassifier, ClassificationRules};

/// Explicit account categories; accounts not listed fall back to keyword
/// rules.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: HashMap<String, AccountCategory>,
    fallback: ClassificationRules,
}

impl ChartOfAccounts {
    /// Creates an empty chart with the given fallback rules.
    #[must_use]
    pub fn new(fallback: ClassificationRules) -> Self {
        Self {
            accounts: HashMap::new(),
            fallback,
        }
    }

    /// Builds the chart and its fallback rules from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClassificationError` if a category is unknown or an account is
    /// listed twice.
    pub fn from_config(config: &ClassificationConfig) -> Result<Self, ClassificationError> {
        let mut chart = Self::new(ClassificationRules::from_config(config));
        for entry in &config.chart {
            chart.insert(entry.account.clone(), entry.category.parse()?)?;
        }
        Ok(chart)
    }

    /// Assigns an explicit category to an account.
    ///
    /// # Errors
    ///
    /// Returns `ClassificationError::DuplicateAccount` if the account is
    /// already listed.
    pub fn insert(
        &mut self,
        account: impl Into<String>,
        category: AccountCategory,
    ) -> Result<(), ClassificationError> {
        let account = account.into();
        if self.accounts.contains_key(&account) {
            return Err(ClassificationError::DuplicateAccount(account));
        }
        self.accounts.insert(account, category);
        Ok(())
    }

    /// Number of explicitly listed accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account is listed explicitly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountClassifier for ChartOfAccounts {
    fn classify(&self, account: &str) -> Option<AccountCategory> {
        self.accounts
            .get(account)
            .copied()
            .or_else(|| self.fallback.classify(account))
    }
}
