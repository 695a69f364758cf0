//! Transaction model
//!
//! A transaction is a single income or expense entry. Records are append-only:
//! once created they are never edited or removed by this tool.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Earliest year a transaction date may carry
pub const MIN_YEAR: i32 = 1;
/// Latest year a transaction date may carry
pub const MAX_YEAR: i32 = 9999;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Always positive; the kind carries the direction
    pub amount: Money,

    /// Spending category (required for expenses, absent for income)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub description: String,

    pub date: NaiveDate,

    /// When the entry was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create an income entry
    pub fn income(amount: Money, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Income,
            amount,
            category: None,
            description: description.into(),
            date,
            created_at: Some(Utc::now()),
        }
    }

    /// Create an expense entry
    pub fn expense(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Expense,
            amount,
            category: Some(category.into()),
            description: description.into(),
            date,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Calendar year of the transaction date
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month (1-12) of the transaction date
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year()) {
            return Err(TransactionValidationError::DateOutOfRange(self.date));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::MissingDescription);
        }

        match (self.kind, self.category.as_deref()) {
            (TransactionKind::Expense, None) => {
                return Err(TransactionValidationError::MissingCategory)
            }
            (TransactionKind::Expense, Some(cat)) if cat.trim().is_empty() => {
                return Err(TransactionValidationError::MissingCategory)
            }
            _ => {}
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    DateOutOfRange(NaiveDate),
    MissingDescription,
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::DateOutOfRange(date) => {
                write!(f, "Date {} is outside years {}-{}", date, MIN_YEAR, MAX_YEAR)
            }
            Self::MissingDescription => write!(f, "Description is required"),
            Self::MissingCategory => write!(f, "Category is required for expenses"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
