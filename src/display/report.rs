//! Report formatting for terminal output
//!
//! Balance summaries and monthly reports, plus small text helpers shared with
//! the transaction listings.

use crate::config::Settings;
use crate::models::Money;
use crate::reports::MonthlyReport;
use crate::services::Summary;

use super::transaction::format_transaction_register;

const WIDTH: usize = 40;

/// Format income, expense and balance totals
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&summary_line("Total Income:", money(summary.income, symbol)));
    output.push_str(&summary_line("Total Expense:", money(summary.expense, symbol)));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&summary_line("Balance:", money(summary.balance, symbol)));

    output
}

/// Format a monthly report: header, totals, category breakdown, transactions
pub fn format_monthly_report(report: &MonthlyReport, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Financial Report: {}\n", report.period.long_name()));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No transactions found for this period.\n");
        return output;
    }

    output.push_str(&format_summary(&report.summary, settings));

    if !report.categories.is_empty() {
        output.push_str("\nExpenses by category:\n");
        for cat in &report.categories {
            output.push_str(&format!(
                "  {:<18}{:>12} {:>6}\n",
                truncate(&cat.category, 18),
                money(cat.total, symbol),
                format_percentage(cat.percentage)
            ));
        }
    }

    output.push_str(&format!("\nTransactions ({}):\n", report.summary.count));
    output.push_str(&format_transaction_register(&report.transactions, settings));

    output
}

fn summary_line(label: &str, value: String) -> String {
    format!("{:<16}{:>24}\n", label, value)
}

fn money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportPeriod, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            income: Money::from_units(1000),
            expense: Money::from_units(200),
            balance: Money::from_units(800),
            count: 2,
        };
        let text = format_summary(&summary, &Settings::default());

        assert!(text.contains("Total Income:"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("$200.00"));
        assert!(text.lines().last().unwrap().ends_with("$800.00"));
    }

    #[test]
    fn test_negative_balance() {
        let summary = Summary {
            income: Money::zero(),
            expense: Money::from_units(5),
            balance: Money::from_units(-5),
            count: 1,
        };
        let text = format_summary(&summary, &Settings::default());
        assert!(text.contains("-$5.00"));
    }

    #[test]
    fn test_format_monthly_report() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        let period = ReportPeriod::new(2024, 5).unwrap();
        let report = MonthlyReport::from_transactions(
            period,
            vec![
                Transaction::income(Money::from_units(1000), "Salary", date(1)),
                Transaction::expense(Money::from_units(250), "Rent", "May rent", date(2)),
            ],
        )
        .unwrap();

        let text = format_monthly_report(&report, &Settings::default());
        assert!(text.starts_with("Financial Report: May 2024"));
        assert!(text.contains("Expenses by category:"));
        assert!(text.contains("Rent"));
        assert!(text.contains("100%"));
        assert!(text.contains("$750.00"));
        assert!(text.contains("Transactions (2):"));
    }

    #[test]
    fn test_empty_monthly_report() {
        let period = ReportPeriod::new(2024, 7).unwrap();
        let report = MonthlyReport::from_transactions(period, Vec::new()).unwrap();

        let text = format_monthly_report(&report, &Settings::default());
        assert!(text.contains("July 2024"));
        assert!(text.contains("No transactions found for this period."));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.24), "5.2%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("A very long string", 10), "A very ...");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }
}
