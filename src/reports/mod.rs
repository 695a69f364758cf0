//! Reports for pocket-ledger
//!
//! Read-only views derived from the stored transactions. Nothing here is
//! persisted unless explicitly exported.

pub mod monthly;

pub use monthly::{CategorySpending, MonthlyReport};
