//! Display formatting for terminal output
//!
//! Turns transactions, summaries and reports into plain text. Amounts and
//! dates follow the user's settings.

pub mod report;
pub mod transaction;

pub use report::{format_monthly_report, format_summary};
pub use transaction::{format_transaction_added, format_transaction_register};
