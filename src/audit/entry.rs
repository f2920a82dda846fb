//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExpenseRecord;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was added
    Create,
    /// Record was edited
    Update,
    /// Record was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records have no identity beyond their position, so the entry keeps the
/// positional index at the time of the operation along with the record
/// values themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Positional index of the affected row
    pub index: usize,

    /// The record before the operation (for updates/deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<ExpenseRecord>,

    /// The record after the operation (for creates/updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<ExpenseRecord>,

    /// Human-readable diff summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for an added record
    pub fn create(index: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            index,
            before: None,
            after: Some(record.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an edited record
    pub fn update(
        index: usize,
        before: &ExpenseRecord,
        after: &ExpenseRecord,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            index,
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary,
        }
    }

    /// Create a new audit entry for a deleted record
    pub fn delete(index: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            index,
            before: Some(record.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.index
        );

        if let Some(record) = self.after.as_ref().or(self.before.as_ref()) {
            output.push_str(&format!(" ({})", record.description));
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

    fn lunch() -> ExpenseRecord {
        ExpenseRecord::new("2026-01-01", "Food", "12", "Lunch")
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(3, &lunch());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.index, 3);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(lunch()));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(1, &lunch());

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.before, Some(lunch()));
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(1, &lunch());
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(!json.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_human_readable_format() {
        let mut after = lunch();
        after.amount = "15".into();
        let entry = AuditEntry::update(2, &lunch(), &after, Some("amount: \"12\" -> \"15\"".into()));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE #2"));
        assert!(formatted.contains("(Lunch)"));
        assert!(formatted.contains("Changes: amount"));
    }
}
