//! Storage layer for pocket-ledger
//!
//! JSON file storage with atomic writes and automatic directory creation,
//! plus the audit log that records every stored transaction.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::PocketPaths;
use crate::error::PocketError;
use crate::models::Transaction;

/// Storage coordinator owning the transaction list and audit log
pub struct Storage {
    pub transactions: TransactionRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: PocketPaths) -> Result<Self, PocketError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
        })
    }

    /// Turn audit logging on or off for this session
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PocketError> {
        self.transactions.load()
    }

    /// Record a newly stored transaction in the audit log
    pub fn log_create(&self, txn: &Transaction) -> Result<(), PocketError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::created(txn))
    }
}
