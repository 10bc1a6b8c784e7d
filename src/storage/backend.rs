//! Persistence backends for the ledger blob
//!
//! A backend stores exactly one serialized `LedgerState` under one key and
//! replaces it wholesale on every save.

use std::path::PathBuf;

use tracing::debug;

use crate::config::paths::STORAGE_KEY;
use crate::error::{AuditError, AuditResult};
use crate::models::LedgerState;

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// Abstraction over where the ledger blob lives
pub trait LedgerBackend {
    /// Read the stored aggregate; `Ok(None)` when nothing has been stored
    fn load(&self) -> AuditResult<Option<LedgerState>>;

    /// Replace the stored aggregate with `state`
    fn save(&mut self, state: &LedgerState) -> AuditResult<()>;

    /// Remove the stored entry entirely
    fn clear(&mut self) -> AuditResult<()>;

    /// Human-readable location, for messages
    fn describe(&self) -> String;
}

/// Stores the ledger as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LedgerBackend for JsonFileBackend {
    fn load(&self) -> AuditResult<Option<LedgerState>> {
        let state = read_json_optional(&self.path)?;
        debug!(path = %self.path.display(), found = state.is_some(), "read ledger file");
        Ok(state)
    }

    fn save(&mut self, state: &LedgerState) -> AuditResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(
            path = %self.path.display(),
            transactions = state.transactions.len(),
            "wrote ledger file"
        );
        Ok(())
    }

    fn clear(&mut self) -> AuditResult<()> {
        remove_if_exists(&self.path)?;
        debug!(path = %self.path.display(), "removed ledger file");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the serialized blob in memory
///
/// Round-trips through JSON exactly like the file backend, which makes it
/// suitable for embedding and tests. A read-only instance rejects writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blob: Option<String>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing serialized blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            read_only: false,
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// The stored blob, if any
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    fn ensure_writable(&self) -> AuditResult<()> {
        if self.read_only {
            return Err(AuditError::Storage(format!(
                "Storage for '{}' is read-only",
                STORAGE_KEY
            )));
        }
        Ok(())
    }
}

impl LedgerBackend for MemoryBackend {
    fn load(&self) -> AuditResult<Option<LedgerState>> {
        match &self.blob {
            None => Ok(None),
            Some(blob) => serde_json::from_str(blob).map(Some).map_err(|e| {
                AuditError::Storage(format!("Failed to parse '{}': {}", STORAGE_KEY, e))
            }),
        }
    }

    fn save(&mut self, state: &LedgerState) -> AuditResult<()> {
        self.ensure_writable()?;
        self.blob = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn clear(&mut self) -> AuditResult<()> {
        self.ensure_writable()?;
        self.blob = None;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("memory:{}", STORAGE_KEY)
    }
}
