//! Workbook model.

use serde::{Deserialize, Serialize};

use super::sheet_name::sanitize_sheet_name;

/// A named table of string cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name, already sanitized.
    pub name: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows, one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Creates an empty sheet; the name is sanitized.
    #[must_use]
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: sanitize_sheet_name(name),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width");
        self.rows.push(row);
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the sheet has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in display order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates an empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sheet.
    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Looks up a sheet by name.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Sheet names in order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    /// Number of sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if there are no sheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
