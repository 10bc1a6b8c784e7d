//! Business logic layer
//!
//! `transaction` guards what enters the ledger; `reconciliation` derives
//! totals, balance and discrepancy from whatever is in it.

pub mod reconciliation;
pub mod transaction;

pub use reconciliation::{
    discrepancy, physical_total_from_counts, system_balance, total_expense, total_income,
    ActivityRatio, ReconciliationStatus, ReconciliationSummary,
};
pub use transaction::{CreateTransactionInput, TransactionService};
