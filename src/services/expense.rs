//! Expense service
//!
//! Non-interactive Add, List, Total, Delete and Edit over the ledger file.
//! Delete and Edit work on a ledger the caller read earlier (the one shown to
//! the user), rewrite the whole file, and only then update the caller's copy.
//!
//! Once the file is written a mutation counts as done. A failure to record it
//! in the audit log afterwards is handed back in [`Saved::audit_error`]
//! rather than as an `Err`.

use rust_decimal::Decimal;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Ledger};
use crate::storage::LedgerStore;

/// A change that has been written to the ledger file
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    /// Set when the audit entry for the change could not be written
    pub audit_error: Option<LedgerError>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a LedgerStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service without audit logging
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store, audit: None }
    }

    /// Create a new expense service that logs mutations
    pub fn with_audit(store: &'a LedgerStore, audit: &'a AuditLogger) -> Self {
        Self {
            store,
            audit: Some(audit),
        }
    }

    /// Append a record to the end of the ledger
    pub fn add(&self, record: &ExpenseRecord) -> LedgerResult<Saved<()>> {
        let Some(audit) = self.audit else {
            self.store.append(record)?;
            return Ok(Saved {
                value: (),
                audit_error: None,
            });
        };

        self.store.ensure_initialized()?;
        let index = self.store.read_all()?.row_count();
        self.store.append(record)?;

        Ok(Saved {
            value: (),
            audit_error: audit.log(&AuditEntry::create(index, record)).err(),
        })
    }

    /// Read the whole ledger
    pub fn list(&self) -> LedgerResult<Ledger> {
        self.store.read_all()
    }

    /// Sum all parseable amounts
    pub fn total(&self) -> LedgerResult<Decimal> {
        Ok(self.store.read_all()?.total())
    }

    /// Remove the record at `index` and rewrite the file
    ///
    /// Returns the removed record. If the index is rejected or the rewrite
    /// fails, both the file and `ledger` are left unchanged.
    pub fn delete(&self, ledger: &mut Ledger, index: usize) -> LedgerResult<Saved<ExpenseRecord>> {
        let mut updated = ledger.clone();
        let removed = updated.remove(index)?;
        self.store.write_all(&updated)?;
        *ledger = updated;

        let audit_error = self
            .audit
            .and_then(|audit| audit.log(&AuditEntry::delete(index, &removed)).err());

        Ok(Saved {
            value: removed,
            audit_error,
        })
    }

    /// Replace the record at `index` and rewrite the file
    ///
    /// Returns the previous record. If the index is rejected or the rewrite
    /// fails, both the file and `ledger` are left unchanged.
    pub fn update(
        &self,
        ledger: &mut Ledger,
        index: usize,
        record: ExpenseRecord,
    ) -> LedgerResult<Saved<ExpenseRecord>> {
        let mut updated = ledger.clone();
        let previous = updated.replace(index, record.clone())?;
        self.store.write_all(&updated)?;
        *ledger = updated;

        let audit_error = self.audit.and_then(|audit| {
            let diff = generate_diff(&previous, &record);
            audit
                .log(&AuditEntry::update(index, &previous, &record, diff))
                .err()
        });

        Ok(Saved {
            value: previous,
            audit_error,
        })
    }
}
