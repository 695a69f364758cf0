//! Audit entry data structure
//!
//! One entry is written per recorded transaction, holding a snapshot of the
//! record as it was stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Income or expense
    pub kind: TransactionKind,

    /// ID of the recorded transaction
    pub entity_id: String,

    /// Human-readable label (description and amount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON snapshot of the stored record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an audit entry for a newly recorded transaction
    pub fn created(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: txn.kind,
            entity_id: txn.id.to_string(),
            entity_name: Some(format!("{} {}", txn.description, txn.amount)),
            after: serde_json::to_value(txn).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] ADD {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.kind,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}
