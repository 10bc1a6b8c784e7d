//! Reports module for Cash Audit
//!
//! Derived views over the ledger that are not part of reconciliation itself.

pub mod cash_flow;

pub use cash_flow::{cash_flow_series, peak_amount, CashFlowPoint};
