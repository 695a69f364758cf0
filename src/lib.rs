//! pocket-ledger - command-line income and expense tracker
//!
//! Records income and expense entries in a flat JSON file, lists and filters
//! them, computes balance summaries, and produces monthly reports.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, money amounts, identifiers, calendar months
//! - `storage`: JSON file storage layer
//! - `audit`: Append-only log of recorded transactions
//! - `services`: Validation, filtering and aggregation
//! - `reports`: Monthly report generation and CSV export
//! - `display`: Terminal formatting
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket_ledger::config::PocketPaths;
//! use pocket_ledger::services::TransactionService;
//! use pocket_ledger::storage::Storage;
//!
//! # fn main() -> Result<(), pocket_ledger::PocketError> {
//! let mut storage = Storage::new(PocketPaths::new()?)?;
//! storage.load_all()?;
//!
//! let mut service = TransactionService::new(&mut storage);
//! service.add_income("1000", "Salary", "2024-01-01")?;
//! service.add_expense("200", "Food", "Lunch", "2024-01-02")?;
//!
//! let summary = service.summarize()?;
//! println!("Balance: {}", summary.balance);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketError, PocketResult};
