//! Transaction service
//!
//! Business logic for recording income and expenses, listing and filtering
//! the stored entries, and computing balance summaries.

use chrono::{Datelike, NaiveDate};

use crate::error::{PocketError, PocketResult};
use crate::models::transaction::{MAX_YEAR, MIN_YEAR};
use crate::models::{parse_month, parse_year, Money, ReportPeriod, Transaction};
use crate::storage::Storage;

/// Date format accepted on input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

/// Optional predicates narrowing the transaction list
///
/// Every predicate that is set must match; unset predicates match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact, case-sensitive category name
    pub category: Option<String>,
    /// Calendar month (1-12)
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw command-line values, validating month and year
    pub fn from_args(
        category: Option<String>,
        month: Option<&str>,
        year: Option<&str>,
    ) -> PocketResult<Self> {
        let month = month
            .map(parse_month)
            .transpose()
            .map_err(|e| PocketError::Validation(e.to_string()))?;
        let year = year
            .map(parse_year)
            .transpose()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        Ok(Self {
            category,
            month,
            year,
        })
    }

    /// Filter matching one calendar month
    pub fn for_period(period: ReportPeriod) -> Self {
        Self::new().year(period.year).month(period.month)
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Check a transaction against every set predicate
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if txn.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(month) = self.month {
            if txn.month() != month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if txn.year() != year {
                return false;
            }
        }
        true
    }
}

/// Aggregate totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    /// Income minus expense
    pub balance: Money,
    /// Number of transactions summed
    pub count: usize,
}

impl Summary {
    /// Sum income and expense amounts over the given transactions
    ///
    /// Fails rather than wrapping when a total exceeds the range of `Money`.
    pub fn from_transactions<'t, I>(transactions: I) -> PocketResult<Self>
    where
        I: IntoIterator<Item = &'t Transaction>,
    {
        let mut summary = Self::default();
        for txn in transactions {
            let total = if txn.is_income() {
                &mut summary.income
            } else {
                &mut summary.expense
            };
            *total = total.checked_add(txn.amount).ok_or_else(total_overflow)?;
            summary.count += 1;
        }
        summary.balance = summary
            .income
            .checked_sub(summary.expense)
            .ok_or_else(total_overflow)?;
        Ok(summary)
    }
}

/// Error for a running total that no longer fits in `Money`
pub fn total_overflow() -> PocketError {
    PocketError::Overflow("Transaction totals are too large to compute".into())
}

/// Parse an amount argument, rejecting anything that isn't a positive number
pub fn parse_amount(input: &str) -> PocketResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        PocketError::Validation(format!(
            "Invalid amount '{}': {}. Use a number like '200' or '12.50'",
            input.trim(),
            e
        ))
    })?;

    if !amount.is_positive() {
        return Err(PocketError::Validation(format!(
            "Amount must be greater than zero (got '{}')",
            input.trim()
        )));
    }
    if amount > Money::MAX {
        return Err(PocketError::Validation(format!(
            "Amount must not exceed {} (got '{}')",
            Money::MAX,
            input.trim()
        )));
    }

    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date argument
///
/// chrono's `%Y` also accepts signed and five-digit years, so the year is
/// checked separately.
pub fn parse_date(input: &str) -> PocketResult<NaiveDate> {
    let input = input.trim();
    let invalid = || PocketError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input));

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date)
}

fn require_text(value: &str, field: &str) -> PocketResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PocketError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record an income entry
    pub fn add_income(
        &mut self,
        amount: &str,
        description: &str,
        date: &str,
    ) -> PocketResult<Transaction> {
        let amount = parse_amount(amount)?;
        let description = require_text(description, "Description")?;
        let date = parse_date(date)?;

        self.record(Transaction::income(amount, description, date))
    }

    /// Record an expense entry
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: &str,
    ) -> PocketResult<Transaction> {
        let amount = parse_amount(amount)?;
        let category = require_text(category, "Category")?;
        let description = require_text(description, "Description")?;
        let date = parse_date(date)?;

        self.record(Transaction::expense(amount, category, description, date))
    }

    /// Validate, append, persist and audit a new transaction
    ///
    /// Either every step succeeds or the stored list is left as it was.
    fn record(&mut self, txn: Transaction) -> PocketResult<Transaction> {
        txn.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        self.storage.transactions.append(txn.clone());
        if let Err(e) = self.storage.transactions.save() {
            self.storage.transactions.pop();
            return Err(e);
        }

        if let Err(e) = self.storage.log_create(&txn) {
            self.storage.transactions.pop();
            self.storage.transactions.save()?;
            return Err(e);
        }

        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        self.storage.transactions.all()
    }

    /// Transactions matching every predicate of the filter, in insertion order
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.list()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Income, expense and balance over every stored transaction
    pub fn summarize(&self) -> PocketResult<Summary> {
        Summary::from_transactions(self.list())
    }

    /// Income, expense and balance over the transactions matching a filter
    pub fn summarize_filtered(&self, filter: &TransactionFilter) -> PocketResult<Summary> {
        Summary::from_transactions(self.list().iter().filter(|t| filter.matches(t)))
    }
}
