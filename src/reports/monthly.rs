//! Monthly report
//!
//! Income, expense and balance for one calendar month, with expenses broken
//! down by category.

use std::collections::HashMap;
use std::io::Write;

use crate::error::PocketResult;
use crate::models::{Money, ReportPeriod, Transaction};
use crate::services::{total_overflow, Summary, TransactionFilter, TransactionService};

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the period's total expense
    pub percentage: f64,
}

/// Report for a single month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub period: ReportPeriod,
    pub summary: Summary,
    /// Transactions in the period, in insertion order
    pub transactions: Vec<Transaction>,
    /// Expense categories, largest first
    pub categories: Vec<CategorySpending>,
}

impl MonthlyReport {
    /// Build the report for a month from the stored transactions
    pub fn generate(
        service: &TransactionService<'_>,
        period: ReportPeriod,
    ) -> PocketResult<Self> {
        let transactions = service.filter(&TransactionFilter::for_period(period));
        Self::from_transactions(period, transactions)
    }

    /// Build the report from an already-filtered transaction list
    pub fn from_transactions(
        period: ReportPeriod,
        transactions: Vec<Transaction>,
    ) -> PocketResult<Self> {
        let summary = Summary::from_transactions(&transactions)?;

        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let name = txn.category.as_deref().unwrap_or("Uncategorized");
            let entry = by_category.entry(name).or_insert((Money::zero(), 0));
            entry.0 = entry.0.checked_add(txn.amount).ok_or_else(total_overflow)?;
            entry.1 += 1;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(name, (total, count))| CategorySpending {
                category: name.to_string(),
                total,
                transaction_count: count,
                percentage: percentage_of(total, summary.expense),
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(Self {
            period,
            summary,
            transactions,
            categories,
        })
    }

    /// True when no transactions fall in the period
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Write the category breakdown and totals as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> PocketResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let period = self.period.to_string();

        csv.write_record([
            "Period",
            "Section",
            "Category",
            "Amount",
            "Transactions",
            "Percentage",
        ])?;

        for cat in &self.categories {
            csv.write_record([
                period.clone(),
                "expense".to_string(),
                cat.category.clone(),
                format!("{:.2}", cat.total.as_f64()),
                cat.transaction_count.to_string(),
                format!("{:.2}", cat.percentage),
            ])?;
        }

        let totals = [
            ("total_income", self.summary.income),
            ("total_expense", self.summary.expense),
            ("balance", self.summary.balance),
        ];
        for (label, amount) in totals {
            csv.write_record([
                period.clone(),
                label.to_string(),
                String::new(),
                format!("{:.2}", amount.as_f64()),
                String::new(),
                String::new(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn may_transactions() -> Vec<Transaction> {
        vec![
            Transaction::income(Money::from_units(1000), "Salary", date(5, 1)),
            Transaction::expense(Money::from_units(30), "Food", "Groceries", date(5, 3)),
            Transaction::expense(Money::from_units(50), "Transport", "Train", date(5, 4)),
            Transaction::expense(Money::from_units(20), "Food", "Lunch", date(5, 9)),
        ]
    }

    #[test]
    fn test_report_totals() {
        let period = ReportPeriod::new(2024, 5).unwrap();
        let report = MonthlyReport::from_transactions(period, may_transactions()).unwrap();

        assert_eq!(report.summary.income, Money::from_units(1000));
        assert_eq!(report.summary.expense, Money::from_units(100));
        assert_eq!(report.summary.balance, Money::from_units(900));
        assert!(!report.is_empty());
    }

    #[test]
    fn test_category_breakdown_sorted() {
        let period = ReportPeriod::new(2024, 5).unwrap();
        let report = MonthlyReport::from_transactions(period, may_transactions()).unwrap();

        // Food and Transport tie at 50; ties sort by name
        let names: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);
        assert_eq!(report.categories[0].transaction_count, 2);
        assert!((report.categories[0].percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let period = ReportPeriod::new(2024, 7).unwrap();
        let report = MonthlyReport::from_transactions(period, Vec::new()).unwrap();

        assert!(report.is_empty());
        assert!(report.categories.is_empty());
        assert_eq!(report.summary, Summary::default());
    }

    #[test]
    fn test_export_csv() {
        let period = ReportPeriod::new(2024, 5).unwrap();
        let report = MonthlyReport::from_transactions(period, may_transactions()).unwrap();

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Period,Section,Category,Amount,Transactions,Percentage");
        assert_eq!(lines[1], "2024-05,expense,Food,50.00,2,50.00");
        assert_eq!(lines[3], "2024-05,total_income,,1000.00,,");
        assert_eq!(lines[5], "2024-05,balance,,900.00,,");
    }

    #[test]
    fn test_category_overflow_is_an_error() {
        let period = ReportPeriod::new(2024, 5).unwrap();
        let transactions = vec![
            Transaction::expense(Money::from_cents(i64::MAX), "Rent", "May", date(5, 1)),
            Transaction::expense(Money::from_units(1), "Rent", "Fee", date(5, 2)),
        ];

        assert!(MonthlyReport::from_transactions(period, transactions).is_err());
    }
}
