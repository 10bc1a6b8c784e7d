//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and removing ledger entries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{AuditError, AuditResult};
use crate::models::{Category, Money, TransactionType};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::{AssumeYes, Deletion, LedgerBackend, LedgerStore};

use super::StdinConfirm;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Direction: income (masuk) or expense (keluar)
        kind: String,
        /// Amount in rupiah, e.g. "150000", "1.250.000" or "10,50"
        amount: String,
        /// Category name (Penjualan, Operasional, Gaji, Perlengkapan, Jasa, Lain-lain)
        #[arg(short, long)]
        category: String,
        /// What the money was for
        #[arg(short, long)]
        description: String,
        /// Receipt or invoice reference
        #[arg(short = 'r', long = "ref")]
        evidence_ref: Option<String>,
        /// Auditor notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or any unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<B: LedgerBackend>(
    store: &mut LedgerStore<B>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> AuditResult<()> {
    let mut service = TransactionService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            evidence_ref,
            notes,
        } => {
            let kind = kind
                .parse::<TransactionType>()
                .map_err(AuditError::Validation)?;

            let amount = Money::parse(&amount).map_err(|e| {
                AuditError::Validation(format!(
                    "Invalid amount: '{}'. Use a number like '150000' or '1.250.000'. Error: {}",
                    amount, e
                ))
            })?;

            let category = category
                .parse::<Category>()
                .map_err(|e| AuditError::Validation(e.to_string()))?;

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                category,
                description,
                evidence_ref,
                auditor_notes: notes,
            })?;

            println!("Recorded transaction {}", txn.id);
            println!();
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(limit);
            print!("{}", format_transaction_table(transactions, symbol));
            if !transactions.is_empty() {
                println!("{} transaction(s)", transactions.len());
            }
        }

        TransactionCommands::Delete { id, force } => {
            let outcome = if force {
                service.delete(&id, &mut AssumeYes)?
            } else {
                service.delete(&id, &mut StdinConfirm)?
            };

            match outcome {
                Deletion::Removed(txn) => {
                    println!(
                        "Deleted transaction: {} ({} {})",
                        txn.id,
                        txn.description,
                        txn.signed_amount().format_with_symbol(symbol)
                    );
                }
                Deletion::NotFound => return Err(AuditError::transaction_not_found(id)),
                Deletion::Declined => println!("Aborted."),
            }
        }
    }

    Ok(())
}
