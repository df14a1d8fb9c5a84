//! Workbook writers.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use rust_xlsxwriter::{Format, Worksheet, XlsxError};
use tracing::info;

use super::error::ExportError;
use super::workbook::{Sheet, Workbook};

/// Writes a workbook to some destination.
pub trait WorkbookWriter {
    /// Writes the workbook and returns the files created.
    fn write(&self, workbook: &Workbook) -> Result<Vec<PathBuf>, ExportError>;
}

/// Writes one sheet as CSV, header row first.
pub fn write_sheet_csv<W: Write>(writer: W, sheet: &Sheet) -> Result<(), ExportError> {
    let mut wrt = WriterBuilder::new().from_writer(writer);
    wrt.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        wrt.write_record(row)?;
    }
    wrt.flush()?;
    Ok(())
}

/// Writes the workbook as one `.xlsx` file.
///
/// Each sheet becomes a worksheet of the same name, in workbook order, with a
/// bold header row. Cells are written as text.
#[derive(Debug, Clone)]
pub struct XlsxWorkbookWriter {
    path: PathBuf,
}

impl XlsxWorkbookWriter {
    /// Creates a writer targeting `path`; missing parent directories are created.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_worksheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), XlsxError> {
        let bold = Format::new().set_bold();
        worksheet.set_name(&sheet.name)?;
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, cell_col(col)?, header, &bold)?;
        }
        for (index, row) in sheet.rows.iter().enumerate() {
            let row_num = cell_row(index + 1)?;
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_num, cell_col(col)?, value)?;
            }
        }
        Ok(())
    }
}

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write(&self, workbook: &Workbook) -> Result<Vec<PathBuf>, ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut xlsx = rust_xlsxwriter::Workbook::new();
        for sheet in &workbook.sheets {
            Self::write_worksheet(xlsx.add_worksheet(), sheet)?;
        }
        xlsx.save(&self.path)?;

        info!(path = %self.path.display(), sheets = workbook.len(), "workbook exported as xlsx");
        Ok(vec![self.path.clone()])
    }
}

fn cell_row(index: usize) -> Result<u32, XlsxError> {
    u32::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn cell_col(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

/// Writes every sheet as a CSV file in one directory.
///
/// Files are named `{position}_{sheet}.csv` so a directory listing keeps the
/// sheet order.
#[derive(Debug, Clone)]
pub struct CsvDirectoryWriter {
    dir: PathBuf,
}

impl CsvDirectoryWriter {
    /// Creates a writer targeting `dir`; the directory is created on write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(position: usize, sheet: &Sheet) -> String {
        format!("{:02}_{}.csv", position + 1, sheet.name)
    }
}

impl WorkbookWriter for CsvDirectoryWriter {
    fn write(&self, workbook: &Workbook) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(&self.dir)?;

        let mut written = Vec::with_capacity(workbook.len());
        for (position, sheet) in workbook.sheets.iter().enumerate() {
            let path = self.dir.join(Self::file_name(position, sheet));
            write_sheet_csv(BufWriter::new(File::create(&path)?), sheet)?;
            written.push(path);
        }

        info!(dir = %self.dir.display(), sheets = written.len(), "workbook exported as csv");
        Ok(written)
    }
}

/// Writes the whole workbook as one JSON document.
#[derive(Debug, Clone)]
pub struct JsonWorkbookWriter {
    path: PathBuf,
}

impl JsonWorkbookWriter {
    /// Creates a writer targeting `path`; missing parent directories are created.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkbookWriter for JsonWorkbookWriter {
    fn write(&self, workbook: &Workbook) -> Result<Vec<PathBuf>, ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, workbook)?;
        out.flush()?;

        info!(path = %self.path.display(), sheets = workbook.len(), "workbook exported as json");
        Ok(vec![self.path.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workbook() -> Workbook {
        let mut journal = Sheet::new("General Journal", &["Date", "Account", "Memo"]);
        journal.push_row(vec!["2024-01-01".into(), "Kas".into(), "setoran, awal".into()]);
        let mut summary = Sheet::new("Income Statement", &["Description", "Amount"]);
        summary.push_row(vec!["Net Income".into(), "150.00".into()]);

        let mut workbook = Workbook::new();
        workbook.push(journal);
        workbook.push(summary);
        workbook
    }

    #[test]
    fn test_write_sheet_csv_quotes_fields() {
        let mut buf = Vec::new();
        write_sheet_csv(&mut buf, &workbook().sheets[0]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Date,Account,Memo\n2024-01-01,Kas,\"setoran, awal\"\n"
        );
    }

    #[test]
    fn test_csv_directory_writer() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("laporan");
        let writer = CsvDirectoryWriter::new(&target);

        let files = writer.write(&workbook()).unwrap();
        assert_eq!(
            files,
            [
                target.join("01_General Journal.csv"),
                target.join("02_Income Statement.csv"),
            ]
        );
        let summary = fs::read_to_string(&files[1]).unwrap();
        assert_eq!(summary, "Description,Amount\nNet Income,150.00\n");
    }

    #[test]
    fn test_json_writer_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let writer = JsonWorkbookWriter::new(&path);

        let files = writer.write(&workbook()).unwrap();
        assert_eq!(files, [path.clone()]);

        let parsed: Workbook = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, workbook());
    }

    #[test]
    fn test_xlsx_writer_keeps_sheet_names_and_order() {
        use calamine::{Data, Reader, Xlsx, open_workbook};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("laporan.xlsx");
        let mut workbook = workbook();
        workbook.push(Sheet::new("Ledger - Kas_", &["Date"]));

        let files = XlsxWorkbookWriter::new(&path).write(&workbook).unwrap();
        assert_eq!(files, [path.clone()]);

        let mut xlsx: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(
            xlsx.sheet_names(),
            ["General Journal", "Income Statement", "Ledger - Kas_"]
        );

        let journal = xlsx.worksheet_range("General Journal").unwrap();
        assert_eq!(journal.get_value((0, 1)), Some(&Data::String("Account".to_string())));
        assert_eq!(
            journal.get_value((1, 2)),
            Some(&Data::String("setoran, awal".to_string()))
        );
        let summary = xlsx.worksheet_range("Income Statement").unwrap();
        assert_eq!(summary.get_value((1, 1)), Some(&Data::String("150.00".to_string())));
    }

    #[test]
    fn test_xlsx_writer_rejects_duplicate_sheet_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut workbook = workbook();
        workbook.push(Sheet::new("Income Statement", &["Description"]));

        let result = XlsxWorkbookWriter::new(dir.path().join("dup.xlsx")).write(&workbook);
        assert!(matches!(result, Err(ExportError::Xlsx(_))));
    }

    #[test]
    fn test_csv_writer_reports_io_errors() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A regular file cannot be used as the output directory.
        let writer = CsvDirectoryWriter::new(file.path());
        assert!(matches!(writer.write(&workbook()), Err(ExportError::Io(_))));
    }
}
