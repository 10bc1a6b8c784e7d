//! The ledger store
//!
//! Holds the canonical `LedgerState` and makes every mutation durable by
//! writing the whole aggregate to its backend. Callers own the store and
//! pass it around explicitly.

use tracing::{debug, info, warn};

use crate::error::AuditResult;
use crate::models::{LedgerState, PhysicalCount, Transaction, TransactionId};

use super::backend::LedgerBackend;

/// Synchronous yes/no gate consulted before destructive operations
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Gate that approves everything (`--force`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Outcome of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    Removed(Transaction),
    /// No transaction had that ID; nothing changed
    NotFound,
    /// The confirmation gate said no; nothing changed
    Declined,
}

/// Owner of the ledger aggregate and its persistence
pub struct LedgerStore<B: LedgerBackend> {
    state: LedgerState,
    backend: B,
}

impl<B: LedgerBackend> LedgerStore<B> {
    /// Rehydrate the ledger from `backend`
    ///
    /// Starts empty when nothing is stored. Stored data that fails to parse
    /// is returned as an error rather than discarded.
    pub fn load(backend: B) -> AuditResult<Self> {
        let state = backend.load()?.unwrap_or_default();
        info!(
            location = %backend.describe(),
            transactions = state.transactions.len(),
            "ledger loaded"
        );
        Ok(Self { state, backend })
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn physical_total(&self) -> PhysicalCount {
        self.state.physical_total
    }

    pub fn auditor_name(&self) -> &str {
        &self.state.auditor_name
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Prepend a transaction and persist
    ///
    /// The record is trusted as-is; validation happens before it gets here.
    pub fn add_transaction(&mut self, transaction: Transaction) -> AuditResult<()> {
        debug!(id = %transaction.id, kind = %transaction.kind, "adding transaction");
        self.state.transactions.insert(0, transaction);
        self.persist()
    }

    /// Remove the transaction with `id` once `confirm` approves
    ///
    /// An unknown ID is a no-op: no prompt, no write, no error.
    pub fn delete_transaction(
        &mut self,
        id: TransactionId,
        confirm: &mut impl Confirm,
    ) -> AuditResult<Deletion> {
        let Some(index) = self.state.transactions.iter().position(|t| t.id == id) else {
            debug!(%id, "delete requested for unknown transaction");
            return Ok(Deletion::NotFound);
        };

        let prompt = format!(
            "Delete transaction {} ({})?",
            id, self.state.transactions[index].description
        );
        if !confirm.confirm(&prompt) {
            return Ok(Deletion::Declined);
        }

        let removed = self.state.transactions.remove(index);
        debug!(%id, "transaction removed");
        self.persist()?;
        Ok(Deletion::Removed(removed))
    }

    /// Overwrite the physical cash total and persist
    pub fn set_physical_total(&mut self, total: PhysicalCount) -> AuditResult<()> {
        debug!(total = ?total.amount(), "setting physical total");
        self.state.physical_total = total;
        self.persist()
    }

    /// Overwrite the auditor name and persist
    pub fn set_auditor_name(&mut self, name: impl Into<String>) -> AuditResult<()> {
        self.state.auditor_name = name.into();
        self.persist()
    }

    /// Clear transactions and the physical total, then remove the stored entry
    ///
    /// The auditor name stays in memory and is written again by the next
    /// mutation. Returns `false` when the gate declines.
    pub fn reset(&mut self, confirm: &mut impl Confirm) -> AuditResult<bool> {
        if !confirm.confirm("This deletes all audit data. Continue?") {
            return Ok(false);
        }

        self.state.transactions.clear();
        self.state.physical_total = PhysicalCount::Pending;
        self.backend.clear().inspect_err(|e| {
            warn!(error = %e, "failed to clear stored ledger");
        })?;
        info!(location = %self.backend.describe(), "ledger reset");
        Ok(true)
    }

    /// Write the whole aggregate; the in-memory change stands even on failure
    fn persist(&mut self) -> AuditResult<()> {
        self.backend.save(&self.state).inspect_err(|e| {
            warn!(error = %e, "ledger change was not persisted");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionType};
    use crate::storage::backend::{JsonFileBackend, MemoryBackend};
    use tempfile::TempDir;

    fn income(units: i64) -> Transaction {
        Transaction::new(
            TransactionType::Income,
            Money::from_units(units),
            Category::Sales,
            "Penjualan",
            None,
        )
    }

    fn expense(units: i64) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_units(units),
            Category::Operations,
            "Operasional",
            Some("KW-9".into()),
        )
    }

    fn memory_store() -> LedgerStore<MemoryBackend> {
        LedgerStore::load(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut store = memory_store();
        let first = income(500_000);
        let second = expense(200_000);

        store.add_transaction(first.clone()).unwrap();
        store.add_transaction(second.clone()).unwrap();

        assert_eq!(store.transactions(), &[second, first]);
        let reloaded = store.backend().load().unwrap().unwrap();
        assert_eq!(&reloaded, store.state());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = memory_store();
        store.add_transaction(income(1_000)).unwrap();
        let before = store.state().clone();

        let mut asked = false;
        let outcome = store
            .delete_transaction(TransactionId::new(), &mut |_: &str| {
                asked = true;
                true
            })
            .unwrap();

        assert_eq!(outcome, Deletion::NotFound);
        assert!(!asked);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_delete_declined_keeps_record() {
        let mut store = memory_store();
        let txn = income(1_000);
        store.add_transaction(txn.clone()).unwrap();

        let outcome = store
            .delete_transaction(txn.id, &mut |_: &str| false)
            .unwrap();
        assert_eq!(outcome, Deletion::Declined);
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let mut store = memory_store();
        let keep = income(1_000);
        let drop = expense(500);
        store.add_transaction(keep.clone()).unwrap();
        store.add_transaction(drop.clone()).unwrap();

        let outcome = store.delete_transaction(drop.id, &mut AssumeYes).unwrap();
        assert_eq!(outcome, Deletion::Removed(drop));
        assert_eq!(store.transactions(), &[keep]);
        assert_eq!(store.backend().load().unwrap().unwrap().transactions.len(), 1);
    }

    #[test]
    fn test_set_physical_total_and_auditor() {
        let mut store = memory_store();
        store
            .set_physical_total(PhysicalCount::Counted(Money::from_units(250_000)))
            .unwrap();
        store.set_auditor_name("Budi").unwrap();

        let stored = store.backend().load().unwrap().unwrap();
        assert_eq!(
            stored.physical_total,
            PhysicalCount::Counted(Money::from_units(250_000))
        );
        assert_eq!(stored.auditor_name, "Budi");

        store.set_physical_total(PhysicalCount::Pending).unwrap();
        assert!(store.physical_total().is_pending());
    }

    #[test]
    fn test_reset_clears_state_and_entry() {
        let mut store = memory_store();
        store.add_transaction(income(1_000)).unwrap();
        store
            .set_physical_total(PhysicalCount::Counted(Money::from_units(1_000)))
            .unwrap();
        store.set_auditor_name("Budi").unwrap();

        assert!(!store.reset(&mut |_: &str| false).unwrap());
        assert_eq!(store.transactions().len(), 1);

        assert!(store.reset(&mut AssumeYes).unwrap());
        assert!(store.transactions().is_empty());
        assert!(store.physical_total().is_pending());
        assert!(store.backend().blob().is_none());
        assert_eq!(store.auditor_name(), "Budi");
    }

    #[test]
    fn test_write_failure_is_reported_but_memory_changes() {
        let mut backend = MemoryBackend::new();
        backend.set_read_only(true);
        let mut store = LedgerStore::load(backend).unwrap();

        let result = store.add_transaction(income(1_000));
        assert!(result.is_err());
        assert_eq!(store.transactions().len(), 1);
        assert!(store.backend().blob().is_none());
    }

    #[test]
    fn test_load_rejects_malformed_data() {
        let backend = MemoryBackend::with_blob("{\"transactions\": \"oops\"}");
        assert!(LedgerStore::load(backend).is_err());
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let backend = MemoryBackend::with_blob("{\"auditorName\": \"Rina\"}");
        let store = LedgerStore::load(backend).unwrap();
        assert!(store.transactions().is_empty());
        assert!(store.physical_total().is_pending());
        assert_eq!(store.auditor_name(), "Rina");
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cashAuditData.json");

        let mut store = LedgerStore::load(JsonFileBackend::new(path.clone())).unwrap();
        store.add_transaction(income(500_000)).unwrap();
        store
            .add_transaction(expense(200_000).with_notes("struk hilang"))
            .unwrap();
        store
            .set_physical_total(PhysicalCount::Counted(Money::from_cents(30_000_050)))
            .unwrap();
        store.set_auditor_name("Dewi").unwrap();
        let expected = store.state().clone();

        let reloaded = LedgerStore::load(JsonFileBackend::new(path)).unwrap();
        assert_eq!(reloaded.state(), &expected);
    }
}
