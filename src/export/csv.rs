//! CSV audit report
//!
//! One row per transaction followed by a summary block. The physical total
//! and discrepancy rows only appear once a count has been verified.

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::io::Write;

use crate::error::{AuditError, AuditResult};
use crate::models::Transaction;
use crate::services::ReconciliationSummary;

/// Header row of the report
pub const REPORT_HEADER: [&str; 8] = [
    "ID",
    "Tanggal",
    "Tipe",
    "Kategori",
    "Keterangan",
    "Ref. Bukti",
    "Masuk",
    "Keluar",
];

/// `audit_report_<YYYY-MM-DD>.csv`
pub fn report_filename(date: NaiveDate) -> String {
    format!("audit_report_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the audit report for `transactions` and their `summary`
///
/// `date_format` is the strftime pattern for the `Tanggal` column.
pub fn export_report_csv<W: Write>(
    transactions: &[Transaction],
    summary: &ReconciliationSummary,
    date_format: &str,
    writer: &mut W,
) -> AuditResult<()> {
    write_row(writer, REPORT_HEADER.iter().map(|s| s.to_string()))?;

    for txn in transactions {
        write_row(
            writer,
            [
                escape_csv(&txn.id.full()),
                escape_csv(&format_date(txn.date.format(date_format), date_format)?),
                txn.kind.as_str().to_string(),
                escape_csv(txn.category.label()),
                escape_csv(&txn.description),
                escape_csv(&txn.evidence_ref),
                txn.income_amount().to_plain_string(),
                txn.expense_amount().to_plain_string(),
            ],
        )?;
    }

    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "RINGKASAN").map_err(export_err)?;
    writeln!(
        writer,
        "Total Masuk,,,,,,{},",
        summary.total_income.to_plain_string()
    )
    .map_err(export_err)?;
    writeln!(
        writer,
        "Total Keluar,,,,,,,{}",
        summary.total_expense.to_plain_string()
    )
    .map_err(export_err)?;
    writeln!(
        writer,
        "Saldo Sistem,,,,,,{},",
        summary.system_balance.to_plain_string()
    )
    .map_err(export_err)?;

    if let (Some(physical), Some(diff)) = (summary.physical_total.amount(), summary.discrepancy()) {
        writeln!(writer, "Saldo Fisik,,,,,,{},", physical.to_plain_string()).map_err(export_err)?;
        writeln!(writer, "Selisih,,,,,,{},", diff.to_plain_string()).map_err(export_err)?;
    }

    writer.flush().map_err(export_err)?;
    Ok(())
}

/// Render the report to a string
pub fn render_report_csv(
    transactions: &[Transaction],
    summary: &ReconciliationSummary,
    date_format: &str,
) -> AuditResult<String> {
    let mut buffer = Vec::new();
    export_report_csv(transactions, summary, date_format, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AuditError::Export(e.to_string()))
}

/// Render a chrono date, turning a bad strftime pattern into an error
pub fn format_date(formatted: DelayedFormat<StrftimeItems<'_>>, pattern: &str) -> AuditResult<String> {
    let mut out = String::new();
    write!(out, "{}", formatted)
        .map_err(|_| AuditError::Export(format!("Invalid date format '{}'", pattern)))?;
    Ok(out)
}

fn write_row<W: Write>(writer: &mut W, fields: impl IntoIterator<Item = String>) -> AuditResult<()> {
    let line: Vec<String> = fields.into_iter().collect();
    writeln!(writer, "{}", line.join(",")).map_err(export_err)
}

fn export_err(e: std::io::Error) -> AuditError {
    AuditError::Export(e.to_string())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PhysicalCount, TransactionType};
    use chrono::{TimeZone, Utc};

    fn txn(kind: TransactionType, units: i64, description: &str) -> Transaction {
        Transaction::recorded_at(
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
            kind,
            Money::from_units(units),
            Category::Sales,
            description,
            None,
        )
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(report_filename(date), "audit_report_2025-02-03.csv");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_report_rows_and_pending_summary() {
        let transactions = vec![
            txn(TransactionType::Expense, 200_000, "Sewa, bulan Jan"),
            txn(TransactionType::Income, 500_000, "Penjualan"),
        ];
        let summary = ReconciliationSummary::from_transactions(&transactions, PhysicalCount::Pending);
        let csv = render_report_csv(&transactions, &summary, "%d/%m/%Y").unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Tanggal,Tipe,Kategori,Keterangan,Ref. Bukti,Masuk,Keluar");
        assert_eq!(
            lines[1],
            format!(
                "{},15/01/2025,EXPENSE,Penjualan,\"Sewa, bulan Jan\",N/A,0,200000",
                transactions[0].id.full()
            )
        );
        assert!(lines[2].ends_with(",INCOME,Penjualan,Penjualan,N/A,500000,0"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "RINGKASAN");
        assert_eq!(lines[5], "Total Masuk,,,,,,500000,");
        assert_eq!(lines[6], "Total Keluar,,,,,,,200000");
        assert_eq!(lines[7], "Saldo Sistem,,,,,,300000,");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_report_with_physical_count() {
        let transactions = vec![
            txn(TransactionType::Expense, 200_000, "Biaya"),
            txn(TransactionType::Income, 500_000, "Penjualan"),
        ];
        let summary = ReconciliationSummary::from_transactions(
            &transactions,
            PhysicalCount::Counted(Money::from_units(250_000)),
        );
        let csv = render_report_csv(&transactions, &summary, "%Y-%m-%d").unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[8], "Saldo Fisik,,,,,,250000,");
        assert_eq!(lines[9], "Selisih,,,,,,-50000,");
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        let transactions = vec![txn(TransactionType::Income, 1_000, "Kas")];
        let summary = ReconciliationSummary::from_transactions(&transactions, PhysicalCount::Pending);

        let err = render_report_csv(&transactions, &summary, "%Q").unwrap_err();
        assert!(matches!(err, AuditError::Export(msg) if msg.contains("%Q")));
    }

    #[test]
    fn test_empty_report() {
        let summary = ReconciliationSummary::from_transactions(&[], PhysicalCount::Pending);
        let csv = render_report_csv(&[], &summary, "%d/%m/%Y").unwrap();

        assert_eq!(
            csv,
            "ID,Tanggal,Tipe,Kategori,Keterangan,Ref. Bukti,Masuk,Keluar\n\
             \n\
             RINGKASAN\n\
             Total Masuk,,,,,,0,\n\
             Total Keluar,,,,,,,0\n\
             Saldo Sistem,,,,,,0,\n"
        );
    }

    #[test]
    fn test_report_parses_as_standard_csv() {
        let mut quoted = txn(TransactionType::Income, 1_000, "Kata \"kunci\", dua");
        quoted.evidence_ref = "REF,1".into();
        let transactions = vec![quoted.clone()];
        let summary = ReconciliationSummary::from_transactions(&transactions, PhysicalCount::Pending);
        let csv_text = render_report_csv(&transactions, &summary, "%d/%m/%Y").unwrap();

        let mut reader = ::csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], quoted.id.full());
        assert_eq!(&first[4], "Kata \"kunci\", dua");
        assert_eq!(&first[5], "REF,1");
        assert_eq!(&first[6], "1000");
    }
}
