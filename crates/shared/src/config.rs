//! Application configuration management.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account classification keywords.
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Accounts used by the closing entries.
    #[serde(default)]
    pub closing: ClosingConfig,
    /// Report inputs and tolerances.
    #[serde(default)]
    pub report: ReportConfig,
    /// Journal input files.
    #[serde(default)]
    pub input: InputConfig,
    /// Export destination.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Keyword lists used to classify accounts by name.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationConfig {
    /// Keywords marking revenue accounts.
    #[serde(default = "default_revenue_keywords")]
    pub revenue_keywords: Vec<String>,
    /// Keywords marking expense accounts.
    #[serde(default = "default_expense_keywords")]
    pub expense_keywords: Vec<String>,
    /// Keywords marking asset accounts.
    #[serde(default = "default_asset_keywords")]
    pub asset_keywords: Vec<String>,
    /// Keywords marking liability accounts.
    #[serde(default = "default_liability_keywords")]
    pub liability_keywords: Vec<String>,
    /// Keywords marking equity accounts.
    #[serde(default = "default_equity_keywords")]
    pub equity_keywords: Vec<String>,
    /// Explicit chart of accounts; listed accounts skip keyword matching.
    #[serde(default)]
    pub chart: Vec<ChartEntryConfig>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            revenue_keywords: default_revenue_keywords(),
            expense_keywords: default_expense_keywords(),
            asset_keywords: default_asset_keywords(),
            liability_keywords: default_liability_keywords(),
            equity_keywords: default_equity_keywords(),
            chart: Vec::new(),
        }
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn default_revenue_keywords() -> Vec<String> {
    keywords(&["Pendapatan", "Revenue"])
}

fn default_expense_keywords() -> Vec<String> {
    keywords(&["Beban", "Expense"])
}

fn default_asset_keywords() -> Vec<String> {
    keywords(&["Kas", "Piutang", "Persediaan", "Cash", "Receivable", "Inventory"])
}

fn default_liability_keywords() -> Vec<String> {
    keywords(&["Utang", "Payable"])
}

fn default_equity_keywords() -> Vec<String> {
    keywords(&["Modal", "Capital"])
}

/// One account of an explicit chart of accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartEntryConfig {
    /// Exact account name.
    pub account: String,
    /// Category name (revenue, expense, asset, liability, equity).
    pub category: String,
}

/// Accounts the closing entries post to.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosingConfig {
    /// Clearing account that nets revenue and expense.
    #[serde(default = "default_clearing_account")]
    pub clearing_account: String,
    /// Equity account that receives net income.
    #[serde(default = "default_equity_account")]
    pub equity_account: String,
}

impl Default for ClosingConfig {
    fn default() -> Self {
        Self {
            clearing_account: default_clearing_account(),
            equity_account: default_equity_account(),
        }
    }
}

fn default_clearing_account() -> String {
    "Ikhtisar Laba Rugi".to_string()
}

fn default_equity_account() -> String {
    "Modal".to_string()
}

/// Equity statement inputs and balance sheet tolerance.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Owner's equity at the start of the period.
    #[serde(default)]
    pub opening_equity: Decimal,
    /// Owner withdrawals during the period.
    #[serde(default)]
    pub withdrawals: Decimal,
    /// Largest difference between the balance sheet sides still treated as balanced.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            opening_equity: Decimal::ZERO,
            withdrawals: Decimal::ZERO,
            balance_tolerance: default_balance_tolerance(),
        }
    }
}

fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Journal input files read by the report driver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// CSV file with regular transactions.
    #[serde(default)]
    pub journal_path: Option<PathBuf>,
    /// CSV file with adjusting entries.
    #[serde(default)]
    pub adjusting_path: Option<PathBuf>,
}

/// Export output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One `.xlsx` workbook with a worksheet per sheet.
    #[default]
    Xlsx,
    /// One CSV file per sheet in a directory.
    Csv,
    /// A single JSON document holding every sheet.
    Json,
}

/// Export destination.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ExportFormat,
    /// Output file (xlsx, json) or directory (csv).
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("laporan_keuangan.xlsx")
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SIKLUS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
