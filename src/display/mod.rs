//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_audit_log, format_category_menu, format_ledger, format_total};
