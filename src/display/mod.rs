//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger for terminal display,
//! including the transaction table, the dashboard card and text charts.

pub mod report;
pub mod transaction;

pub use report::{
    format_activity_ratio, format_cash_flow_chart, format_count_breakdown, format_summary,
    status_label,
};
pub use transaction::{format_transaction_details, format_transaction_table};
