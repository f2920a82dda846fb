//! Core data models for the expense ledger
//!
//! This module contains the data structures of the ledger domain: expense
//! records, the ledger itself with its positional indexing, the fixed
//! category list, and the tagged result of an interactive selection.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod selection;

pub use category::{Category, FALLBACK_CATEGORY};
pub use expense::ExpenseRecord;
pub use ledger::Ledger;
pub use selection::Selection;
