//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

use super::diff::record_diff;

/// Ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Append,
    Update,
    Remove,
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Append => write!(f, "APPEND"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Remove => write!(f, "REMOVE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// 0-based ledger position the operation touched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Record before the operation (updates and removals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Record>,

    /// Record after the operation (appends and updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Record>,

    /// Number of records dropped by a clear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_count: Option<usize>,

    /// Human-readable diff summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            index: None,
            before: None,
            after: None,
            removed_count: None,
            diff_summary: None,
        }
    }

    pub fn append(index: usize, record: &Record) -> Self {
        Self {
            index: Some(index),
            after: Some(record.clone()),
            ..Self::new(Operation::Append)
        }
    }

    pub fn update(index: usize, before: &Record, after: &Record) -> Self {
        Self {
            index: Some(index),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: record_diff(before, after),
            ..Self::new(Operation::Update)
        }
    }

    pub fn remove(index: usize, record: &Record) -> Self {
        Self {
            index: Some(index),
            before: Some(record.clone()),
            ..Self::new(Operation::Remove)
        }
    }

    pub fn clear(removed_count: usize) -> Self {
        Self {
            removed_count: Some(removed_count),
            ..Self::new(Operation::Clear)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(index) = self.index {
            output.push_str(&format!(" #{}", index + 1));
        }

        match (&self.before, &self.after) {
            (_, Some(after)) if self.operation == Operation::Append => {
                output.push_str(&format!(" {}", after))
            }
            (Some(before), _) if self.operation == Operation::Remove => {
                output.push_str(&format!(" {}", before))
            }
            _ => {}
        }

        if let Some(count) = self.removed_count {
            output.push_str(&format!(" ({} record(s))", count));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn groceries() -> Record {
        Record::new("2024-01-02", TransactionKind::Expense, "Food", "500.00", "Groceries")
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Append.to_string(), "APPEND");
        assert_eq!(Operation::Clear.to_string(), "CLEAR");
    }

    #[test]
    fn test_append_entry() {
        let entry = AuditEntry::append(0, &groceries());
        assert_eq!(entry.operation, Operation::Append);
        assert_eq!(entry.index, Some(0));
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(groceries()));
    }

    #[test]
    fn test_update_entry_has_diff() {
        let mut after = groceries();
        after.amount = "450.00".into();

        let entry = AuditEntry::update(2, &groceries(), &after);
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: \"500.00\" -> \"450.00\"")
        );
    }

    #[test]
    fn test_clear_entry() {
        let entry = AuditEntry::clear(7);
        assert_eq!(entry.removed_count, Some(7));
        assert!(entry.index.is_none());
        assert!(entry.format_human_readable().contains("CLEAR (7 record(s))"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::remove(1, &groceries());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"remove\""));
        assert!(!json.contains("after"));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::remove(1, &groceries()).format_human_readable();
        assert!(formatted.contains("REMOVE #2"));
        assert!(formatted.contains("Groceries"));
    }
}
