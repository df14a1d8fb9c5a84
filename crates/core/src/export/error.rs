//! Export error types.

use siklus_shared::AppError;
use thiserror::Error;

/// Errors raised while writing a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XLSX encoding error.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}
