//! JSON snapshot export
//!
//! Writes the full ledger aggregate plus a metadata block describing it.
//! The ledger fields use the same keys as the persisted blob, so a snapshot
//! can be dropped in place of `cashAuditData.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{AuditError, AuditResult};
use crate::models::{LedgerState, Money};
use crate::services::ReconciliationSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,

    #[serde(flatten)]
    pub ledger: LedgerState,

    pub metadata: SnapshotMetadata,
}

/// Derived figures recorded alongside the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub system_balance: Money,
    pub discrepancy: Option<Money>,
    pub earliest_transaction: Option<DateTime<Utc>>,
    pub latest_transaction: Option<DateTime<Utc>>,
}

impl SnapshotExport {
    pub fn from_state(state: &LedgerState) -> Self {
        let summary = ReconciliationSummary::from_state(state);

        let metadata = SnapshotMetadata {
            transaction_count: state.transactions.len(),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            system_balance: summary.system_balance,
            discrepancy: summary.discrepancy(),
            earliest_transaction: state.transactions.iter().map(|t| t.date).min(),
            latest_transaction: state.transactions.iter().map(|t| t.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: state.clone(),
            metadata,
        }
    }
}

/// Export the ledger to JSON
pub fn export_snapshot_json<W: Write>(
    state: &LedgerState,
    writer: &mut W,
    pretty: bool,
) -> AuditResult<()> {
    let export = SnapshotExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| AuditError::Export(format!("Failed to write JSON: {}", e)))?;

    writeln!(writer).map_err(|e| AuditError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PhysicalCount, Transaction, TransactionType};

    fn sample_state() -> LedgerState {
        LedgerState {
            transactions: vec![
                Transaction::new(
                    TransactionType::Expense,
                    Money::from_units(200_000),
                    Category::Payroll,
                    "Gaji harian",
                    None,
                ),
                Transaction::new(
                    TransactionType::Income,
                    Money::from_units(500_000),
                    Category::Sales,
                    "Penjualan",
                    None,
                ),
            ],
            physical_total: PhysicalCount::Counted(Money::from_units(300_000)),
            auditor_name: "Ayu".into(),
        }
    }

    #[test]
    fn test_snapshot_metadata() {
        let export = SnapshotExport::from_state(&sample_state());
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.system_balance, Money::from_units(300_000));
        assert_eq!(export.metadata.discrepancy, Some(Money::zero()));
        assert!(export.metadata.earliest_transaction <= export.metadata.latest_transaction);
    }

    #[test]
    fn test_snapshot_reads_back_as_ledger() {
        let state = sample_state();
        let mut output = Vec::new();
        export_snapshot_json(&state, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["auditorName"], "Ayu");
        assert_eq!(value["physicalTotal"], 300_000);
        assert_eq!(value["metadata"]["totalIncome"], 500_000);

        let ledger: LedgerState = serde_json::from_value(value).unwrap();
        assert_eq!(ledger, state);
    }
}
