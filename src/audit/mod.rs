//! Audit logging for pocket-ledger
//!
//! Every recorded transaction is appended to a line-delimited JSON log
//! (`audit.log`), giving a history that survives hand edits of the data file.
//!
//! - `AuditEntry`: timestamp, transaction kind, ID, label and record snapshot.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::AuditEntry;
pub use logger::AuditLogger;
