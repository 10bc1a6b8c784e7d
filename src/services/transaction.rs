//! Transaction service
//!
//! The input boundary in front of the ledger store: builds records from user
//! input, rejects invalid entries before anything is stored, and resolves
//! short IDs for deletion.

use tracing::info;

use crate::error::{AuditError, AuditResult};
use crate::models::{Category, Money, Transaction, TransactionType};
use crate::storage::{Confirm, Deletion, LedgerBackend, LedgerStore};

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub evidence_ref: Option<String>,
    pub auditor_notes: Option<String>,
}

/// Service for transaction entry and removal
pub struct TransactionService<'a, B: LedgerBackend> {
    store: &'a mut LedgerStore<B>,
}

impl<'a, B: LedgerBackend> TransactionService<'a, B> {
    pub fn new(store: &'a mut LedgerStore<B>) -> Self {
        Self { store }
    }

    /// Validate and record a new transaction
    ///
    /// Nothing reaches the store unless the amount is positive and the
    /// description is non-empty.
    pub fn create(&mut self, input: CreateTransactionInput) -> AuditResult<Transaction> {
        let mut txn = Transaction::new(
            input.kind,
            input.amount,
            input.category,
            input.description.trim(),
            input.evidence_ref,
        );
        if let Some(notes) = input.auditor_notes {
            txn = txn.with_notes(notes);
        }

        txn.validate()
            .map_err(|e| AuditError::Validation(e.to_string()))?;

        self.store.add_transaction(txn.clone())?;
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction recorded");
        Ok(txn)
    }

    /// Delete by full ID or unique prefix
    ///
    /// An ID that matches nothing (or more than one record) leaves the ledger
    /// untouched and reports `Deletion::NotFound`.
    pub fn delete(&mut self, needle: &str, confirm: &mut impl Confirm) -> AuditResult<Deletion> {
        match self.store.state().resolve_id(needle) {
            Some(id) => self.store.delete_transaction(id, confirm),
            None => Ok(Deletion::NotFound),
        }
    }

    /// The `limit` most recently added transactions
    pub fn list(&self, limit: Option<usize>) -> &[Transaction] {
        let state = self.store.state();
        state.recent(limit.unwrap_or(state.transactions.len()))
    }
}
