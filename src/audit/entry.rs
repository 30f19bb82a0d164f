//! Audit entry data structures
//!
//! Defines the structure of audit entries: which month was touched, whether
//! the record was created or replaced, and the record before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MonthId, MonthlyRecord};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was created (month registered or first saved)
    Create,
    /// Record was replaced by a save
    Update,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
        }
    }
}

/// A single audit entry for a monthly record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Month whose record was affected
    pub month: MonthId,

    /// Record before the operation (updates only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<MonthlyRecord>,

    /// Record after the operation
    pub after: MonthlyRecord,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(month: MonthId, record: &MonthlyRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            month,
            before: None,
            after: *record,
            diff_summary: record.diff_from(&MonthlyRecord::zero()),
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(month: MonthId, before: &MonthlyRecord, after: &MonthlyRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            month,
            before: Some(*before),
            after: *after,
            diff_summary: after.diff_from(before),
        }
    }

    /// Format the entry as a single line for display
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.month
        );
        match &self.diff_summary {
            Some(diff) => {
                line.push_str(": ");
                line.push_str(diff);
            }
            None => line.push_str(": (no changes)"),
        }
        line
    }
}
