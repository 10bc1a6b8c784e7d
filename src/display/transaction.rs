//! Transaction display formatting
//!
//! Renders the ledger as a terminal table and single records as detail blocks.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tanggal")]
    date: String,
    #[tabled(rename = "Tipe")]
    kind: &'static str,
    #[tabled(rename = "Kategori")]
    category: &'static str,
    #[tabled(rename = "Keterangan")]
    description: String,
    #[tabled(rename = "Ref. Bukti")]
    evidence_ref: String,
    #[tabled(rename = "Jumlah")]
    amount: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format("%d/%m/%Y %H:%M").to_string(),
        kind: txn.kind.label(),
        category: txn.category.label(),
        description: truncate(&txn.description, 40),
        evidence_ref: truncate(&txn.evidence_ref, 20),
        amount: txn.signed_amount().format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.full()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M:%S UTC")));
    output.push_str(&format!("Type:        {} ({})\n", txn.kind, txn.kind.label()));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Evidence:    {}\n", txn.evidence_ref));

    if let Some(notes) = &txn.auditor_notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionType};

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "Rp"), "No transactions recorded yet.\n");
    }

    #[test]
    fn test_table_contents() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_units(75_000),
            Category::Operations,
            "Bensin motor",
            Some("KW-12".into()),
        );
        let table = format_transaction_table(std::slice::from_ref(&txn), "Rp");

        assert!(table.contains("Keterangan"));
        assert!(table.contains(&txn.id.to_string()));
        assert!(table.contains("Bensin motor"));
        assert!(table.contains("Operasional"));
        assert!(table.contains("Keluar"));
        assert!(table.contains("-Rp 75.000"));
    }

    #[test]
    fn test_details_include_notes() {
        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_units(10_000),
            Category::Services,
            "Jasa servis",
            None,
        )
        .with_notes("dibayar tunai");
        let details = format_transaction_details(&txn, "Rp");

        assert!(details.contains("Amount:      Rp 10.000"));
        assert!(details.contains("Evidence:    N/A"));
        assert!(details.contains("Notes:       dibayar tunai"));
    }
}
