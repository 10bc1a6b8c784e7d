//! Cash-flow series
//!
//! The latest transactions as signed points (income up, expense down),
//! oldest first, for the dashboard chart.

use crate::models::{Money, Transaction, TransactionType};

/// One bar of the cash-flow chart
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowPoint {
    /// Day and short month, e.g. `15 Jan`
    pub label: String,
    /// Positive for income, negative for expense
    pub amount: Money,
    pub kind: TransactionType,
}

/// Build the series from a newest-first ledger
///
/// Takes the `limit` most recently added transactions and returns them in
/// the order they were added.
pub fn cash_flow_series(transactions: &[Transaction], limit: usize) -> Vec<CashFlowPoint> {
    transactions
        .iter()
        .take(limit)
        .rev()
        .map(|t| CashFlowPoint {
            label: t.date.format("%d %b").to_string(),
            amount: t.signed_amount(),
            kind: t.kind,
        })
        .collect()
}

/// Largest absolute amount in the series, used to scale bars
pub fn peak_amount(points: &[CashFlowPoint]) -> Money {
    points
        .iter()
        .map(|p| p.amount.abs())
        .max()
        .unwrap_or_default()
}
