//! Transaction model
//!
//! A single recorded cash inflow or outflow. Everything except the optional
//! auditor notes is fixed once the record is created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Evidence reference stored when none is given
pub const EVIDENCE_PLACEHOLDER: &str = "N/A";

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Wire label (`INCOME` / `EXPENSE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Indonesian label used in listings (`Masuk` / `Keluar`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Masuk",
            Self::Expense => "Keluar",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" | "masuk" => Ok(Self::Income),
            "expense" | "out" | "keluar" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A recorded cash movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    pub category: Category,

    pub description: String,

    /// Receipt or invoice number backing this record
    pub evidence_ref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor_notes: Option<String>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    ///
    /// A blank evidence reference is replaced with [`EVIDENCE_PLACEHOLDER`].
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        evidence_ref: Option<String>,
    ) -> Self {
        Self::recorded_at(Utc::now(), kind, amount, category, description, evidence_ref)
    }

    /// Create a new transaction with an explicit timestamp
    pub fn recorded_at(
        date: DateTime<Utc>,
        kind: TransactionType,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        evidence_ref: Option<String>,
    ) -> Self {
        let evidence_ref = evidence_ref
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| EVIDENCE_PLACEHOLDER.to_string());

        Self {
            id: TransactionId::new(),
            date,
            kind,
            amount,
            category,
            description: description.into(),
            evidence_ref,
            auditor_notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.auditor_notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount in the income column, zero for expenses
    pub fn income_amount(&self) -> Money {
        if self.is_income() {
            self.amount
        } else {
            Money::zero()
        }
    }

    /// Amount in the expense column, zero for income
    pub fn expense_amount(&self) -> Money {
        if self.is_expense() {
            self.amount
        } else {
            Money::zero()
        }
    }

    /// Positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check the entry rules: positive amount and a non-empty description
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "Description is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
