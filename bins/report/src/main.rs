//! Siklus report runner
//!
//! Reads regular and adjusting journals from CSV, runs the accounting cycle
//! and exports every report.
//!
//! Usage: `siklus-report [journal.csv] [adjusting.csv]`; paths default to the
//! `input` configuration section.

mod input;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siklus_core::AccountingCycle;
use siklus_core::export::{
    CsvDirectoryWriter, JsonWorkbookWriter, WorkbookBuilder, WorkbookWriter, XlsxWorkbookWriter,
};
use siklus_core::journal::JournalStore;
use siklus_core::reports::{EquityInputs, ReportEngine};
use siklus_shared::AppConfig;
use siklus_shared::config::ExportFormat;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siklus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let journal_path = args.next().or_else(|| config.input.journal_path.clone());
    let adjusting_path = args.next().or_else(|| config.input.adjusting_path.clone());

    let mut store = JournalStore::new();
    if let Some(path) = journal_path.as_deref() {
        load_transactions(&mut store, path)?;
    } else {
        warn!("no journal file configured, reporting on an empty journal");
    }
    if let Some(path) = adjusting_path.as_deref() {
        load_adjustments(&mut store, path)?;
    }

    let engine = ReportEngine::from_config(&config).context("invalid classification config")?;
    let report = AccountingCycle::new(engine).run(&store, EquityInputs::from(&config.report));

    info!(
        revenue = %report.income_statement.revenue,
        expense = %report.income_statement.expense,
        net_income = %report.income_statement.net_income,
        ending_equity = %report.equity_statement.ending_equity,
        balanced = report.balance_sheet.is_balanced,
        "reports ready"
    );

    let workbook = WorkbookBuilder::from_cycle(&report);
    let output = &config.export.output_path;
    let written = match config.export.format {
        ExportFormat::Xlsx => XlsxWorkbookWriter::new(output).write(&workbook),
        ExportFormat::Csv => CsvDirectoryWriter::new(output).write(&workbook),
        ExportFormat::Json => JsonWorkbookWriter::new(output).write(&workbook),
    }
    .with_context(|| format!("failed to export to {}", output.display()))?;

    info!(files = written.len(), output = %output.display(), "export complete");
    Ok(())
}

fn load_transactions(store: &mut JournalStore, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let (mut accepted, mut skipped) = (0usize, 0usize);

    for row in input::read_transactions(file) {
        let recorded = row
            .map_err(|e| e.to_string())
            .and_then(|tx| store.record_transaction(tx).map(|_| ()).map_err(|e| e.to_string()));
        match recorded {
            Ok(()) => accepted += 1,
            Err(reason) => {
                skipped += 1;
                warn!(file = %path.display(), %reason, "transaction skipped");
            }
        }
    }

    info!(file = %path.display(), accepted, skipped, "journal loaded");
    Ok(())
}

fn load_adjustments(store: &mut JournalStore, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let (mut accepted, mut skipped) = (0usize, 0usize);

    for row in input::read_adjustments(file) {
        let recorded = row
            .map_err(|e| e.to_string())
            .and_then(|adj| store.record_adjustment(adj).map(|_| ()).map_err(|e| e.to_string()));
        match recorded {
            Ok(()) => accepted += 1,
            Err(reason) => {
                skipped += 1;
                warn!(file = %path.display(), %reason, "adjustment skipped");
            }
        }
    }

    info!(file = %path.display(), accepted, skipped, "adjusting journal loaded");
    Ok(())
}
