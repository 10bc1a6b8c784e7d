//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod count;
pub mod ledger;
pub mod report;
pub mod transaction;

pub use count::{handle_count_command, CountCommands};
pub use ledger::{handle_auditor_command, handle_reset_command};
pub use report::{handle_export_command, handle_report_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::io::{self, BufRead, Write};

use crate::storage::Confirm;

/// Confirmation gate that asks on stdout and reads the answer from stdin
///
/// Only `y` or `yes` (any case) approve. A closed stdin or a read error
/// counts as a refusal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&input),
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
