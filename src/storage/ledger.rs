//! Ledger repository for CSV storage
//!
//! Owns the ledger file. Every call opens, fully reads or writes, and closes
//! the file; no handle outlives a single operation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::models::{ExpenseRecord, Ledger};

use super::file_io::{append_csv_row, read_csv_rows, write_csv_atomic};

/// Repository for the ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with only the header row if it is missing or empty
    ///
    /// Returns `true` if the file was written.
    pub fn ensure_initialized(&self) -> Result<bool, LedgerError> {
        let is_empty = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                return Err(LedgerError::Io(format!(
                    "Failed to inspect {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if !is_empty {
            return Ok(false);
        }

        write_csv_atomic(&self.path, [&ExpenseRecord::header()])?;
        Ok(true)
    }

    /// Read the whole ledger, header included
    pub fn read_all(&self) -> Result<Ledger, LedgerError> {
        read_csv_rows(&self.path).map(Ledger::from_rows)
    }

    /// Append one record to the end of the file
    pub fn append(&self, record: &ExpenseRecord) -> Result<(), LedgerError> {
        self.ensure_initialized()?;
        append_csv_row(&self.path, record)
    }

    /// Replace the whole file with the given ledger
    pub fn write_all(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_csv_atomic(&self.path, ledger.rows().map(|(_, row)| row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::new(temp_dir.path().join("expenses.csv"))
    }

    #[test]
    fn test_initialize_creates_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.ensure_initialized().unwrap());

        let ledger = store.read_all().unwrap();
        assert_eq!(ledger.row_count(), 1);
        assert_eq!(ledger.header(), &ExpenseRecord::header());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Date,Category,Amount,Description\n"
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.ensure_initialized().unwrap();
        store
            .append(&ExpenseRecord::new("2026-01-01", "Food", "4", "Soup"))
            .unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(!store.ensure_initialized().unwrap());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_initialize_fills_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "").unwrap();

        assert!(store.ensure_initialized().unwrap());
        assert_eq!(store.read_all().unwrap().row_count(), 1);
    }

    #[test]
    fn test_append_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let record = ExpenseRecord::new("2026-01-01", "Travel", "12", "Train");

        store.append(&record).unwrap();

        let ledger = store.read_all().unwrap();
        assert_eq!(ledger.records(), &[record]);
    }

    #[test]
    fn test_write_all_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store
            .append(&ExpenseRecord::new("2026-01-01", "Food", "1", "a"))
            .unwrap();
        store
            .append(&ExpenseRecord::new("2026-01-02", "Food", "2", "b"))
            .unwrap();

        let mut ledger = store.read_all().unwrap();
        ledger.remove(1).unwrap();
        store.write_all(&ledger).unwrap();

        let reread = store.read_all().unwrap();
        assert_eq!(reread, ledger);
        assert_eq!(reread.records()[0].description, "b");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!(matches!(store.read_all(), Err(LedgerError::Io(_))));
    }
}
