//! The persisted ledger aggregate
//!
//! One `LedgerState` is written as a single JSON object under one storage key:
//! `{ "transactions": [...], "physicalTotal": number | null, "auditorName": "" }`.

use serde::{Deserialize, Serialize};

use super::ids::TransactionId;
use super::money::Money;
use super::transaction::Transaction;

/// Outcome of the last physical cash count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Money>", into = "Option<Money>")]
pub enum PhysicalCount {
    /// No count has been verified yet
    #[default]
    Pending,
    /// Verified total of the cash on hand
    Counted(Money),
}

impl PhysicalCount {
    pub fn amount(&self) -> Option<Money> {
        match self {
            Self::Pending => None,
            Self::Counted(total) => Some(*total),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Option<Money>> for PhysicalCount {
    fn from(value: Option<Money>) -> Self {
        match value {
            Some(total) => Self::Counted(total),
            None => Self::Pending,
        }
    }
}

impl From<PhysicalCount> for Option<Money> {
    fn from(value: PhysicalCount) -> Self {
        value.amount()
    }
}

/// Everything the ledger persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    /// Newest first, in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub physical_total: PhysicalCount,

    #[serde(default)]
    pub auditor_name: String,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Resolve a full ID, or a unique prefix of one, to a transaction ID
    ///
    /// Returns `None` when nothing matches or the prefix is ambiguous.
    pub fn resolve_id(&self, needle: &str) -> Option<TransactionId> {
        if let Ok(id) = needle.parse::<TransactionId>() {
            return self.get(id).map(|t| t.id);
        }

        let mut matches = self.transactions.iter().filter(|t| t.id.matches_prefix(needle));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only.id),
            _ => None,
        }
    }

    /// The first `limit` transactions, i.e. the most recently added
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};

    fn sample(description: &str) -> Transaction {
        Transaction::new(
            TransactionType::Income,
            Money::from_units(1_000),
            Category::Sales,
            description,
            None,
        )
    }

    #[test]
    fn test_physical_total_wire_format() {
        let mut state = LedgerState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert!(json["physicalTotal"].is_null());
        assert_eq!(json["auditorName"], "");
        assert_eq!(json["transactions"], serde_json::json!([]));

        state.physical_total = PhysicalCount::Counted(Money::from_units(250_000));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["physicalTotal"], 250_000);
    }

    #[test]
    fn test_missing_fields_default() {
        let state: LedgerState = serde_json::from_str("{}").unwrap();
        assert!(state.transactions.is_empty());
        assert_eq!(state.physical_total, PhysicalCount::Pending);
        assert_eq!(state.auditor_name, "");

        let state: LedgerState = serde_json::from_str(r#"{"physicalTotal": 0}"#).unwrap();
        assert_eq!(state.physical_total, PhysicalCount::Counted(Money::zero()));
    }

    #[test]
    fn test_malformed_state_is_rejected() {
        assert!(serde_json::from_str::<LedgerState>(r#"{"transactions": 5}"#).is_err());
        assert!(serde_json::from_str::<LedgerState>(r#"{"physicalTotal": "banyak"}"#).is_err());
    }

    #[test]
    fn test_recent_and_resolve() {
        let mut state = LedgerState::new();
        let first = sample("a");
        let second = sample("b");
        state.transactions.insert(0, first.clone());
        state.transactions.insert(0, second.clone());

        assert_eq!(state.recent(1), &[second.clone()]);
        assert_eq!(state.recent(10).len(), 2);

        assert_eq!(state.resolve_id(&first.id.full()), Some(first.id));
        assert_eq!(state.resolve_id(&first.id.full()[..13]), Some(first.id));
        assert_eq!(state.resolve_id(&first.id.to_string()), Some(first.id));
        assert_eq!(state.resolve_id("zzzz"), None);
        assert_eq!(
            state.resolve_id(&TransactionId::new().full()),
            None
        );
    }
}
