//! Storage layer for the expense ledger
//!
//! Provides CSV file storage with atomic rewrites and automatic directory
//! creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{append_csv_row, read_csv_rows, write_csv_atomic};
pub use ledger::LedgerStore;
