//! Service layer for pocket-ledger
//!
//! Business logic on top of the storage layer: input validation, filtering
//! and aggregation.

pub mod transaction;

pub use transaction::{
    parse_amount, parse_date, total_overflow, Summary, TransactionFilter, TransactionService,
    DATE_FORMAT,
};
