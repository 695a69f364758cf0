//! Transaction repository for JSON storage
//!
//! Holds the ordered transaction list in memory and persists it to
//! `transactions.json` as a JSON array. Saving always rewrites the whole file.

use std::path::{Path, PathBuf};

use crate::error::PocketError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Repository for transaction persistence, in insertion order
pub struct TransactionRepository {
    path: PathBuf,
    records: Vec<Transaction>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Load transactions from disk, replacing anything held in memory
    ///
    /// A missing file loads as an empty list. Every record must pass
    /// validation; one bad record fails the whole load.
    pub fn load(&mut self) -> Result<(), PocketError> {
        let records: Vec<Transaction> = read_json(&self.path)?;

        for (index, txn) in records.iter().enumerate() {
            txn.validate().map_err(|e| {
                PocketError::Storage(format!(
                    "Invalid record #{} ({}) in {}: {}",
                    index + 1,
                    txn.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        self.records = records;
        Ok(())
    }

    /// Overwrite the file with the full in-memory list
    pub fn save(&self) -> Result<(), PocketError> {
        write_json_atomic(&self.path, &self.records)
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.records
    }

    /// Append a transaction to the in-memory list
    pub fn append(&mut self, txn: Transaction) {
        self.records.push(txn);
    }

    /// Drop the most recently appended transaction
    ///
    /// Used to undo an append whose save failed.
    pub fn pop(&mut self) -> Option<Transaction> {
        self.records.pop()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
