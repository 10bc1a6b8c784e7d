//! Dashboard, report and export CLI commands

use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{AuditPaths, Settings};
use crate::display::report::{
    double_separator, format_activity_ratio, format_cash_flow_chart, format_header,
    format_summary, separator,
};
use crate::display::transaction::format_transaction_table;
use crate::error::{AuditError, AuditResult};
use crate::export::{export_report_csv, export_snapshot_json, format_date, report_filename};
use crate::reports::cash_flow_series;
use crate::services::ReconciliationSummary;
use crate::storage::{LedgerBackend, LedgerStore};

const REPORT_WIDTH: usize = 48;

/// Print the dashboard: totals, status, activity split, chart and recent entries
pub fn handle_summary_command<B: LedgerBackend>(
    store: &LedgerStore<B>,
    settings: &Settings,
) -> AuditResult<()> {
    let state = store.state();
    let symbol = settings.currency_symbol.as_str();
    let summary = ReconciliationSummary::from_state(state);

    print!("{}", format_summary(&summary, &state.auditor_name, symbol));
    println!();

    println!("Rasio Aktivitas");
    println!("{}", separator(REPORT_WIDTH));
    print!("{}", format_activity_ratio(summary.activity_ratio(), 30));
    println!();

    println!("Arus Kas ({} transaksi terakhir)", settings.chart_limit);
    println!("{}", separator(REPORT_WIDTH));
    print!(
        "{}",
        format_cash_flow_chart(
            &cash_flow_series(&state.transactions, settings.chart_limit),
            symbol,
            20
        )
    );
    println!();

    println!("Transaksi Terbaru");
    print!(
        "{}",
        format_transaction_table(state.recent(settings.recent_limit), symbol)
    );

    Ok(())
}

/// Print the final audit report and write it as CSV
///
/// Without `output` the CSV lands in the reports directory as
/// `audit_report_<date>.csv`.
pub fn handle_report_command<B: LedgerBackend>(
    store: &LedgerStore<B>,
    paths: &AuditPaths,
    settings: &Settings,
    output: Option<PathBuf>,
) -> AuditResult<()> {
    let state = store.state();
    let symbol = settings.currency_symbol.as_str();
    let summary = ReconciliationSummary::from_state(state);
    let today = Local::now().date_naive();

    println!("{}", format_header("LAPORAN AKHIR AUDIT KAS", REPORT_WIDTH));
    println!("{}", double_separator(REPORT_WIDTH));
    let date_format = settings.date_format.as_str();
    println!("Tanggal: {}", format_date(today.format(date_format), date_format)?);
    println!();
    print!("{}", format_transaction_table(&state.transactions, symbol));
    println!();
    print!("{}", format_summary(&summary, &state.auditor_name, symbol));

    let output = match output {
        Some(path) => path,
        None => {
            let dir = paths.reports_dir();
            std::fs::create_dir_all(&dir).map_err(|e| {
                AuditError::Io(format!("Failed to create reports directory: {}", e))
            })?;
            dir.join(report_filename(today))
        }
    };

    let mut writer = create_output(&output)?;
    export_report_csv(&state.transactions, &summary, date_format, &mut writer)?;

    println!();
    println!("Report written to: {}", output.display());
    Ok(())
}

/// Write the full ledger snapshot as JSON
pub fn handle_export_command<B: LedgerBackend>(
    store: &LedgerStore<B>,
    output: PathBuf,
    pretty: bool,
) -> AuditResult<()> {
    let mut writer = create_output(&output)?;
    export_snapshot_json(store.state(), &mut writer, pretty)?;
    writer
        .flush()
        .map_err(|e| AuditError::Export(e.to_string()))?;

    println!(
        "Exported {} transactions to: {}",
        store.transactions().len(),
        output.display()
    );
    Ok(())
}

fn create_output(path: &Path) -> AuditResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        AuditError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
