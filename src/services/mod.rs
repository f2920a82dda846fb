//! Service layer for the expense ledger
//!
//! The service layer provides the ledger operations on top of the storage
//! layer and records every mutation in the audit log.

pub mod expense;

pub use expense::{ExpenseService, Saved};
