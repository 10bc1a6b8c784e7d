//! Storage layer for Cash Audit
//!
//! The ledger is a single JSON blob written atomically on every change.
//! `LedgerStore` owns the in-memory state; a `LedgerBackend` decides where
//! the blob lives.

pub mod backend;
pub mod file_io;
pub mod ledger;

pub use backend::{JsonFileBackend, LedgerBackend, MemoryBackend};
pub use file_io::{read_json_optional, write_json_atomic};
pub use ledger::{AssumeYes, Confirm, Deletion, LedgerStore};

use crate::config::paths::AuditPaths;
use crate::error::AuditError;

/// Open the file-backed ledger under `paths`, creating directories as needed
pub fn open_ledger(paths: &AuditPaths) -> Result<LedgerStore<JsonFileBackend>, AuditError> {
    paths.ensure_directories()?;
    LedgerStore::load(JsonFileBackend::new(paths.ledger_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_ledger_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AuditPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_ledger(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(store.transactions().is_empty());
        assert_eq!(store.backend().path(), &paths.ledger_file());
    }
}
