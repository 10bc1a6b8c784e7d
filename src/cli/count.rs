//! Physical cash count CLI commands
//!
//! Tallies notes and coins by denomination and commits the total as the
//! ledger's verified physical cash.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_count_breakdown, status_label};
use crate::error::{AuditError, AuditResult};
use crate::models::{DenominationCount, Money, PhysicalCount, DENOMINATIONS};
use crate::services::{physical_total_from_counts, ReconciliationSummary};
use crate::storage::{LedgerBackend, LedgerStore};

/// Cash count subcommands
#[derive(Subcommand)]
pub enum CountCommands {
    /// Count cash by denomination and record the physical total
    Set {
        /// Entries as face=count, e.g. 100000=3 50000=1 500=4
        #[arg(required = true)]
        entries: Vec<String>,
        /// Show the total without recording it
        #[arg(long)]
        dry_run: bool,
    },
    /// Forget the recorded physical total
    Clear,
    /// List the accepted denominations
    Denominations,
}

/// Handle a cash count command
pub fn handle_count_command<B: LedgerBackend>(
    store: &mut LedgerStore<B>,
    settings: &Settings,
    cmd: CountCommands,
) -> AuditResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CountCommands::Set { entries, dry_run } => {
            let counts = entries
                .iter()
                .map(|entry| DenominationCount::parse_entry(entry))
                .collect::<Result<DenominationCount, _>>()
                .map_err(|e| AuditError::Validation(e.to_string()))?;
            let total = physical_total_from_counts(&counts);

            print!("{}", format_count_breakdown(&counts, total, symbol));

            if dry_run {
                println!();
                println!("Dry run: physical total not recorded.");
                return Ok(());
            }

            store.set_physical_total(PhysicalCount::Counted(total))?;
            let summary = ReconciliationSummary::from_state(store.state());
            println!();
            println!("Physical total recorded.");
            println!("Status: {}", status_label(summary.status, symbol));
        }

        CountCommands::Clear => {
            store.set_physical_total(PhysicalCount::Pending)?;
            println!("Physical total cleared. Status: Menunggu Opname");
        }

        CountCommands::Denominations => {
            println!("Accepted denominations:");
            for face in DENOMINATIONS {
                println!(
                    "  {:>12}  ({})",
                    Money::from_units(i64::from(face)).format_with_symbol(symbol),
                    face
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction, TransactionType};
    use crate::storage::MemoryBackend;

    fn store_with_balance(units: i64) -> LedgerStore<MemoryBackend> {
        let mut store = LedgerStore::load(MemoryBackend::new()).unwrap();
        store
            .add_transaction(Transaction::new(
                TransactionType::Income,
                Money::from_units(units),
                Category::Sales,
                "Penjualan",
                None,
            ))
            .unwrap();
        store
    }

    fn set(entries: &[&str], dry_run: bool) -> CountCommands {
        CountCommands::Set {
            entries: entries.iter().map(|s| s.to_string()).collect(),
            dry_run,
        }
    }

    #[test]
    fn test_set_records_total() {
        let mut store = store_with_balance(300_000);
        handle_count_command(
            &mut store,
            &Settings::default(),
            set(&["100000=2", "50000=2"], false),
        )
        .unwrap();

        assert_eq!(
            store.physical_total(),
            PhysicalCount::Counted(Money::from_units(300_000))
        );
    }

    #[test]
    fn test_negative_count_clamps_to_zero() {
        let mut store = store_with_balance(0);
        handle_count_command(
            &mut store,
            &Settings::default(),
            set(&["100000=-3", "1000=2"], false),
        )
        .unwrap();

        assert_eq!(
            store.physical_total(),
            PhysicalCount::Counted(Money::from_units(2_000))
        );
    }

    #[test]
    fn test_dry_run_leaves_ledger_untouched() {
        let mut store = store_with_balance(300_000);
        handle_count_command(&mut store, &Settings::default(), set(&["100000=1"], true)).unwrap();
        assert!(store.physical_total().is_pending());
    }

    #[test]
    fn test_unknown_denomination_rejected() {
        let mut store = store_with_balance(300_000);
        let err = handle_count_command(&mut store, &Settings::default(), set(&["75000=1"], false))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.physical_total().is_pending());
    }

    #[test]
    fn test_clear_returns_to_pending() {
        let mut store = store_with_balance(300_000);
        let settings = Settings::default();
        handle_count_command(&mut store, &settings, set(&["100000=3"], false)).unwrap();
        handle_count_command(&mut store, &settings, CountCommands::Clear).unwrap();
        assert!(store.physical_total().is_pending());
    }

    #[test]
    fn test_oversized_count_is_accepted() {
        let mut store = store_with_balance(0);
        handle_count_command(
            &mut store,
            &Settings::default(),
            set(&["100000=99999999999999999999", "50000=1"], false),
        )
        .unwrap();

        assert_eq!(
            store.physical_total(),
            PhysicalCount::Counted(Money::from_cents(i64::MAX))
        );
    }
}
