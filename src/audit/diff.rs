//! Diff generation for audit logging

use crate::models::ExpenseRecord;

const FIELD_NAMES: [&str; 4] = ["date", "category", "amount", "description"];

/// Generate a human-readable diff between two versions of a record
///
/// Lists each changed field as `field: "old" -> "new"`, or `None` when the
/// records are identical.
pub fn generate_diff(before: &ExpenseRecord, after: &ExpenseRecord) -> Option<String> {
    let changes: Vec<String> = FIELD_NAMES
        .iter()
        .zip(before.fields().iter().zip(after.fields().iter()))
        .filter(|(_, (old, new))| old != new)
        .map(|(name, (old, new))| format!("{}: {} -> {}", name, format_value(old), format_value(new)))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a field value, truncating long text
fn format_value(value: &str) -> String {
    if value.chars().count() > 50 {
        let head: String = value.chars().take(47).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExpenseRecord {
        ExpenseRecord::new("2026-01-01", "Food", "10", "Lunch")
    }

    #[test]
    fn test_single_field_change() {
        let mut after = record();
        after.amount = "12.5".into();

        let diff = generate_diff(&record(), &after).unwrap();
        assert_eq!(diff, "amount: \"10\" -> \"12.5\"");
    }

    #[test]
    fn test_multiple_changes() {
        let after = ExpenseRecord::new("2026-01-02", "Food", "10", "Dinner");

        let diff = generate_diff(&record(), &after).unwrap();
        assert!(diff.contains("date: \"2026-01-01\" -> \"2026-01-02\""));
        assert!(diff.contains("description: \"Lunch\" -> \"Dinner\""));
        assert!(!diff.contains("category"));
    }

    #[test]
    fn test_no_changes() {
        assert!(generate_diff(&record(), &record()).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let mut after = record();
        after.description = "é".repeat(100);

        let diff = generate_diff(&record(), &after).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
