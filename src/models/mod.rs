//! Core data models for pocket-ledger
//!
//! Transactions, money amounts, identifiers and calendar periods.

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{parse_month, parse_year, PeriodParseError, ReportPeriod};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
