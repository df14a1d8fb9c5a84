//! Report export.
//!
//! Turns a finished cycle into a workbook of named sheets and writes it out:
//! - `Workbook` / `Sheet` - string tables in display order
//! - `WorkbookBuilder` - lays the cycle outputs out as sheets
//! - `WorkbookWriter` - XLSX, CSV directory and JSON writers
//!
//! No figures are computed here.

pub mod builder;
pub mod error;
pub mod sheet_name;
pub mod workbook;
pub mod writer;

pub use builder::WorkbookBuilder;
pub use error::ExportError;
pub use sheet_name::{MAX_SHEET_NAME_LEN, ledger_sheet_name, sanitize_sheet_name};
pub use workbook::{Sheet, Workbook};
pub use writer::{
    CsvDirectoryWriter, JsonWorkbookWriter, WorkbookWriter, XlsxWorkbookWriter, write_sheet_csv,
};
