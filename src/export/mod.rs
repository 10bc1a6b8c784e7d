//! Export module for Cash Audit
//!
//! - CSV: the audit report (transactions plus summary block)
//! - JSON: a full ledger snapshot with derived metadata

pub mod csv;
pub mod json;

pub use csv::{export_report_csv, format_date, render_report_csv, report_filename, REPORT_HEADER};
pub use json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
