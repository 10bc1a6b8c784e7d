//! Auditor and reset CLI commands

use crate::error::AuditResult;
use crate::storage::{AssumeYes, LedgerBackend, LedgerStore};

use super::StdinConfirm;

/// Show the auditor name, or set it when `name` is given
pub fn handle_auditor_command<B: LedgerBackend>(
    store: &mut LedgerStore<B>,
    name: Option<String>,
) -> AuditResult<()> {
    match name {
        Some(name) => {
            let name = name.trim().to_string();
            store.set_auditor_name(name.as_str())?;
            if name.is_empty() {
                println!("Auditor name cleared.");
            } else {
                println!("Auditor set to: {}", name);
            }
        }
        None if store.auditor_name().is_empty() => println!("No auditor name set."),
        None => println!("Auditor: {}", store.auditor_name()),
    }

    Ok(())
}

/// Wipe all transactions and the physical total
pub fn handle_reset_command<B: LedgerBackend>(
    store: &mut LedgerStore<B>,
    force: bool,
) -> AuditResult<()> {
    let count = store.transactions().len();
    let wiped = if force {
        store.reset(&mut AssumeYes)?
    } else {
        store.reset(&mut StdinConfirm)?
    };

    if wiped {
        println!("Audit data reset. {} transaction(s) removed.", count);
    } else {
        println!("Aborted.");
    }
    Ok(())
}
