//! Keyword-based account classification.

use serde::{Deserialize, Serialize};
use siklus_shared::config::ClassificationConfig;

use super::error::ClassificationError;

/// Report category of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Income earned in the period (credit-normal, temporary).
    Revenue,
    /// Costs of the period (debit-normal, temporary).
    Expense,
    /// Resources owned (debit-normal).
    Asset,
    /// Obligations owed (credit-normal).
    Liability,
    /// Owner's capital (credit-normal).
    Equity,
}

impl AccountCategory {
    /// Returns true for the accounts zeroed by closing entries.
    #[must_use]
    pub fn is_temporary(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
        }
    }
}

impl std::str::FromStr for AccountCategory {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            _ => Err(ClassificationError::UnknownCategory(s.to_string())),
        }
    }
}

/// Decides the report category of an account from its name.
pub trait AccountClassifier {
    /// Returns the category of `account`, or `None` if nothing matches.
    fn classify(&self, account: &str) -> Option<AccountCategory>;

    /// Returns true if `account` belongs to `category`.
    fn is(&self, account: &str, category: AccountCategory) -> bool {
        self.classify(account) == Some(category)
    }
}

/// A single keyword rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Substring looked for in the account name, case-insensitively.
    pub keyword: String,
    /// Category assigned on a match.
    pub category: AccountCategory,
}

impl ClassificationRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(keyword: impl Into<String>, category: AccountCategory) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }

    fn matches(&self, lowercase_account: &str) -> bool {
        !self.keyword.is_empty() && lowercase_account.contains(&self.keyword.to_lowercase())
    }
}

/// Ordered keyword rules; the first rule whose keyword occurs in the account
/// name decides the category.
///
/// Matching is plain substring containment, so "Beban Dibayar Dimuka"
/// (prepaid expense) is classified as an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    rules: Vec<ClassificationRule>,
}

impl ClassificationRules {
    /// Creates a rule set evaluated in the given order.
    #[must_use]
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// Builds rules from configured keyword lists.
    ///
    /// Order: revenue, expense, asset, liability, equity.
    #[must_use]
    pub fn from_config(config: &ClassificationConfig) -> Self {
        let groups = [
            (&config.revenue_keywords, AccountCategory::Revenue),
            (&config.expense_keywords, AccountCategory::Expense),
            (&config.asset_keywords, AccountCategory::Asset),
            (&config.liability_keywords, AccountCategory::Liability),
            (&config.equity_keywords, AccountCategory::Equity),
        ];

        let rules = groups
            .into_iter()
            .flat_map(|(keywords, category)| {
                keywords
                    .iter()
                    .map(move |keyword| ClassificationRule::new(keyword.clone(), category))
            })
            .collect();

        Self { rules }
    }

    /// Appends a rule with the lowest priority.
    pub fn push(&mut self, rule: ClassificationRule) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}

impl AccountClassifier for ClassificationRules {
    fn classify(&self, account: &str) -> Option<AccountCategory> {
        let lowercase = account.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowercase))
            .map(|rule| rule.category)
    }
}
