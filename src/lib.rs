//! Expense ledger - a menu-driven personal expense tracker
//!
//! Expenses are kept as rows of (date, category, amount, description) in a
//! CSV file whose first row is a fixed header. The menu adds, lists, totals,
//! edits and deletes rows; edits and deletes rewrite the whole file
//! atomically.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings management
//! - `error`: Custom error types
//! - `models`: Expense records, the ledger and its positional indexing
//! - `storage`: CSV file storage layer
//! - `services`: Ledger operations on top of storage
//! - `audit`: Audit logging of every change
//! - `display`: Text formatting for the console
//! - `cli`: Console prompts and the menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::models::ExpenseRecord;
//! use expense_ledger::services::ExpenseService;
//! use expense_ledger::storage::LedgerStore;
//!
//! let store = LedgerStore::new("expenses.csv");
//! store.ensure_initialized()?;
//! let service = ExpenseService::new(&store);
//! service.add(&ExpenseRecord::new("2026-01-01", "Food", "12.50", "Lunch"))?;
//! println!("{}", service.total()?);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
