//! Report formatting utilities for terminal output
//!
//! The dashboard summary, reconciliation status, activity ratio and
//! cash-flow chart, plus the small text helpers they share.

use crate::models::{DenominationCount, Money, TransactionType, DENOMINATIONS};
use crate::reports::{peak_amount, CashFlowPoint};
use crate::services::{ActivityRatio, ReconciliationStatus, ReconciliationSummary};

const CARD_WIDTH: usize = 48;

/// Status line for the reconciliation
pub fn status_label(status: ReconciliationStatus, currency_symbol: &str) -> String {
    match status {
        ReconciliationStatus::Pending => "Menunggu Opname".to_string(),
        ReconciliationStatus::Balanced => "SEIMBANG".to_string(),
        ReconciliationStatus::Unbalanced(diff) => {
            format!("SELISIH: {}", diff.format_with_symbol(currency_symbol))
        }
    }
}

/// Format the totals card shown by `summary`
pub fn format_summary(
    summary: &ReconciliationSummary,
    auditor_name: &str,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();
    let auditor = if auditor_name.trim().is_empty() {
        "-"
    } else {
        auditor_name
    };

    output.push_str(&format_header("RINGKASAN AUDIT KAS", CARD_WIDTH));
    output.push('\n');
    output.push_str(&double_separator(CARD_WIDTH));
    output.push('\n');
    output.push_str(&summary_line("Auditor", auditor));
    output.push_str(&summary_line(
        "Total Masuk",
        &summary.total_income.format_with_symbol(currency_symbol),
    ));
    output.push_str(&summary_line(
        "Total Keluar",
        &summary.total_expense.format_with_symbol(currency_symbol),
    ));
    output.push_str(&summary_line(
        "Saldo Sistem",
        &summary.system_balance.format_with_symbol(currency_symbol),
    ));

    let physical = match summary.physical_total.amount() {
        Some(amount) => amount.format_with_symbol(currency_symbol),
        None => "-".to_string(),
    };
    output.push_str(&summary_line("Saldo Fisik", &physical));
    output.push_str(&separator(CARD_WIDTH));
    output.push('\n');
    output.push_str(&summary_line(
        "Status",
        &status_label(summary.status, currency_symbol),
    ));

    output
}

fn summary_line(label: &str, value: &str) -> String {
    format!("{:<14}{:>34}\n", label, value)
}

/// Format the income/expense activity split as two bars
pub fn format_activity_ratio(ratio: ActivityRatio, width: usize) -> String {
    format!(
        "Masuk  {} {:>5}\nKeluar {} {:>5}\n",
        format_bar(ratio.income_percent, 100.0, width),
        format_percentage(ratio.income_percent),
        format_bar(ratio.expense_percent, 100.0, width),
        format_percentage(ratio.expense_percent),
    )
}

/// Format the cash-flow series as a horizontal bar chart
///
/// Bars are scaled to the largest absolute amount in the series.
pub fn format_cash_flow_chart(points: &[CashFlowPoint], currency_symbol: &str, width: usize) -> String {
    if points.is_empty() {
        return "Belum ada data arus kas.\n".to_string();
    }

    let peak = peak_amount(points).as_f64();
    let mut output = String::new();

    for point in points {
        let marker = match point.kind {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        };
        output.push_str(&format!(
            "{:<7} {} {} {}\n",
            point.label,
            marker,
            format_bar(point.amount.abs().as_f64(), peak, width),
            point.amount.format_with_symbol(currency_symbol),
        ));
    }

    output
}

/// Format a denomination tally with its running total
pub fn format_count_breakdown(counts: &DenominationCount, total: Money, currency_symbol: &str) -> String {
    let mut output = String::new();

    for face in DENOMINATIONS {
        let units = counts.count(face);
        if units == 0 {
            continue;
        }
        let face_value = Money::from_units(i64::from(face));
        output.push_str(&format!(
            "{:>14} x {:>5} = {:>18}\n",
            face_value.format_with_symbol(currency_symbol),
            units,
            face_value.times(units).format_with_symbol(currency_symbol),
        ));
    }

    output.push_str(&separator(CARD_WIDTH - 7));
    output.push('\n');
    output.push_str(&format!(
        "{:<22} {:>18}\n",
        "Total Fisik",
        total.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
