//! Ledger display formatting
//!
//! Every function returns the full text to print, newline-terminated, so the
//! console layer only has to write it out.

use rust_decimal::Decimal;

use crate::audit::AuditEntry;
use crate::models::{Category, Ledger};

/// Format the whole ledger, one row per line prefixed with its index
///
/// The header is row 0. Fields are tab-separated.
pub fn format_ledger(ledger: &Ledger) -> String {
    let mut output = String::new();
    for (index, row) in ledger.rows() {
        output.push_str(&format!("{}. {}\n", index, row));
    }
    output
}

/// Format the expense total
pub fn format_total(total: Decimal) -> String {
    format!("Total Expenses: {}\n", total)
}

/// Format the numbered category list
pub fn format_category_menu() -> String {
    Category::all()
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}. {}\n", i + 1, category))
        .collect()
}

/// Format audit entries, oldest first
pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
