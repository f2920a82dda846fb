//! Audit logging for the expense ledger
//!
//! Records every add, edit and delete with before/after values in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, the positional
//!   index affected, and optional before/after records.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL).
//! - `generate_diff`: human-readable summary of the fields an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{generate_diff, AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(index, &record))?;
//!
//! let diff = generate_diff(&before, &after);
//! logger.log(&AuditEntry::update(index, &before, &after, diff))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
