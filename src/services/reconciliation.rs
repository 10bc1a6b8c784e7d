//! Reconciliation calculator
//!
//! Pure functions over a ledger snapshot: income and expense totals, the
//! system balance, the physical count derived from denomination tallies and
//! the discrepancy between the two. Nothing here is cached; every call
//! recomputes from the transactions it is given.

use crate::models::denomination::DENOMINATIONS;
use crate::models::{DenominationCount, LedgerState, Money, PhysicalCount, Transaction};

/// Sum of income amounts
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::income_amount).sum()
}

/// Sum of expense amounts
pub fn total_expense(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::expense_amount).sum()
}

/// Income minus expense; negative balances are valid
pub fn system_balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expense(transactions)
}

/// Physical total minus system balance, or `None` while the count is pending
pub fn discrepancy(physical_total: PhysicalCount, system_balance: Money) -> Option<Money> {
    physical_total.amount().map(|counted| counted - system_balance)
}

/// Value of a denomination tally
///
/// Only the fixed denominations contribute; a denomination that was never
/// entered counts as zero.
pub fn physical_total_from_counts(counts: &DenominationCount) -> Money {
    DENOMINATIONS
        .iter()
        .map(|&face| Money::from_units(i64::from(face)).times(counts.count(face)))
        .sum()
}

/// Where the reconciliation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationStatus {
    /// No physical count has been verified
    Pending,
    /// Physical count equals the system balance exactly
    Balanced,
    /// Physical count differs; carries physical minus system
    Unbalanced(Money),
}

impl ReconciliationStatus {
    pub fn evaluate(physical_total: PhysicalCount, system_balance: Money) -> Self {
        match discrepancy(physical_total, system_balance) {
            None => Self::Pending,
            Some(diff) if diff.is_zero() => Self::Balanced,
            Some(diff) => Self::Unbalanced(diff),
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Income and expense shares of total activity, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityRatio {
    pub income_percent: f64,
    pub expense_percent: f64,
}

impl ActivityRatio {
    /// Shares of `income + expense`; a zero total is treated as 1 so an
    /// empty ledger reads 0% / 0%
    pub fn from_totals(income: Money, expense: Money) -> Self {
        let total = (income + expense).as_f64();
        let denominator = if total == 0.0 { 1.0 } else { total };
        Self {
            income_percent: income.as_f64() / denominator * 100.0,
            expense_percent: expense.as_f64() / denominator * 100.0,
        }
    }
}

/// Derived figures for one ledger snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciliationSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub system_balance: Money,
    pub physical_total: PhysicalCount,
    pub status: ReconciliationStatus,
}

impl ReconciliationSummary {
    pub fn from_transactions(transactions: &[Transaction], physical_total: PhysicalCount) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        let system_balance = total_income - total_expense;

        Self {
            total_income,
            total_expense,
            system_balance,
            physical_total,
            status: ReconciliationStatus::evaluate(physical_total, system_balance),
        }
    }

    pub fn from_state(state: &LedgerState) -> Self {
        Self::from_transactions(&state.transactions, state.physical_total)
    }

    pub fn discrepancy(&self) -> Option<Money> {
        discrepancy(self.physical_total, self.system_balance)
    }

    pub fn is_balanced(&self) -> bool {
        self.status.is_balanced()
    }

    pub fn activity_ratio(&self) -> ActivityRatio {
        ActivityRatio::from_totals(self.total_income, self.total_expense)
    }
}
