//! Transaction display formatting
//!
//! Register-style listings and confirmation lines for transactions.

use crate::config::Settings;
use crate::models::{Transaction, TransactionKind};

use super::report::truncate;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let kind = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{:12} {:10} {} {:14} {:24} {:>12}",
        txn.id,
        txn.date.format(&settings.date_format),
        kind,
        truncate(txn.category.as_deref().unwrap_or(""), 14),
        truncate(&txn.description, 24),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {} {:14} {:24} {:>12}\n",
        "ID", "Date", " ", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(79));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}

/// Confirmation printed after a transaction is recorded
pub fn format_transaction_added(txn: &Transaction, settings: &Settings) -> String {
    let amount = txn.amount.format_with_symbol(&settings.currency_symbol);
    let date = txn.date.format(&settings.date_format);

    match &txn.category {
        Some(category) => format!(
            "{} added: {} [{}] {} on {} ({})",
            txn.kind, amount, category, txn.description, date, txn.id
        ),
        None => format!(
            "{} added: {} {} on {} ({})",
            txn.kind, amount, txn.description, date, txn.id
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn lunch() -> Transaction {
        Transaction::expense(
            Money::from_cents(1250),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&lunch(), &Settings::default());
        assert!(formatted.contains("2024-01-02"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("Lunch"));
        assert!(formatted.ends_with("$12.50"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &Settings::default());
        assert_eq!(formatted, "No transactions found.\n");
    }

    #[test]
    fn test_register_uses_settings() {
        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.date_format = "%d/%m/%Y".into();

        let formatted = format_transaction_register(&[lunch()], &settings);
        assert!(formatted.contains("02/01/2024"));
        assert!(formatted.contains("€12.50"));
        assert!(formatted.contains("1 transaction(s)"));
    }

    #[test]
    fn test_format_added() {
        let settings = Settings::default();
        let text = format_transaction_added(&lunch(), &settings);
        assert!(text.starts_with("Expense added: $12.50 [Food] Lunch on 2024-01-02"));

        let salary = Transaction::income(
            Money::from_units(1000),
            "Salary",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let text = format_transaction_added(&salary, &settings);
        assert!(text.starts_with("Income added: $1000.00 Salary on 2024-01-01"));
    }
}
