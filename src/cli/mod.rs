//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod report;
pub mod transaction;

pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, FilterArgs, TransactionCommands};
