use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cash_audit::cli::{
    handle_auditor_command, handle_count_command, handle_export_command, handle_report_command,
    handle_reset_command, handle_summary_command, handle_transaction_command, CountCommands,
    TransactionCommands,
};
use cash_audit::config::{AuditPaths, Settings};
use cash_audit::logging::init_tracing;
use cash_audit::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "cash-audit",
    version,
    about = "Petty-cash ledger with physical count reconciliation",
    long_about = "Cash Audit records cash income and expenses, tallies the cash on hand \
                  by denomination, and reports any difference between the two as an \
                  audit report."
)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Physical cash count commands
    #[command(subcommand)]
    Count(CountCommands),

    /// Show or set the auditor name
    Auditor {
        /// New auditor name
        name: Option<String>,
    },

    /// Show the reconciliation dashboard
    Summary,

    /// Print the final audit report and save it as CSV
    Report {
        /// CSV output path (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full ledger as JSON
    Export {
        /// Output file path
        output: PathBuf,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Delete all transactions and the physical count
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = AuditPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut ledger = open_ledger(&paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Count(cmd)) => {
            handle_count_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Auditor { name }) => {
            handle_auditor_command(&mut ledger, name)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&ledger, &settings)?;
        }
        Some(Commands::Report { output }) => {
            handle_report_command(&ledger, &paths, &settings, output)?;
        }
        Some(Commands::Export { output, pretty }) => {
            handle_export_command(&ledger, output, pretty)?;
        }
        Some(Commands::Reset { force }) => {
            handle_reset_command(&mut ledger, force)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Cash Audit Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Ledger file:       {}", paths.ledger_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Chart limit:     {}", settings.chart_limit);
        }
        None => {
            println!("Cash Audit - petty-cash ledger and reconciliation");
            println!();
            println!("Run 'cash-audit --help' for usage information.");
            println!("Run 'cash-audit summary' to see the current audit status.");
        }
    }

    Ok(())
}
