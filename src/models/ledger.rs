//! The ledger: a header row followed by expense records
//!
//! Rows are addressed by positional index into the full row sequence, so
//! position 0 is always the header and the first record sits at 1. Indices
//! are unstable: removing a row shifts every later row down by one.

use rust_decimal::Decimal;

use super::expense::ExpenseRecord;
use crate::error::{LedgerError, LedgerResult};

/// In-memory copy of the whole ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    header: ExpenseRecord,
    records: Vec<ExpenseRecord>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger with the fixed header
    pub fn new() -> Self {
        Self {
            header: ExpenseRecord::header(),
            records: Vec::new(),
        }
    }

    /// Build a ledger from rows as they appear in the file
    ///
    /// The first row is taken as the header. No rows gives the fixed header.
    pub fn from_rows(rows: Vec<ExpenseRecord>) -> Self {
        let mut rows = rows.into_iter();
        match rows.next() {
            Some(header) => Self {
                header,
                records: rows.collect(),
            },
            None => Self::new(),
        }
    }

    pub fn header(&self) -> &ExpenseRecord {
        &self.header
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of rows including the header
    pub fn row_count(&self) -> usize {
        self.records.len() + 1
    }

    /// Check if the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows with their positional index, header first
    pub fn rows(&self) -> impl Iterator<Item = (usize, &ExpenseRecord)> {
        std::iter::once(&self.header)
            .chain(self.records.iter())
            .enumerate()
    }

    /// Append a record after the last row
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Parse user input as a positional index of a record
    ///
    /// Accepts only integers in `1..row_count()`. Zero is reported as an
    /// attempt on the header; negatives and anything past the last row are
    /// invalid.
    pub fn resolve_index(&self, input: &str) -> LedgerResult<usize> {
        let input = input.trim();
        let number: i64 = input
            .parse()
            .map_err(|_| LedgerError::InvalidIndex(input.to_string()))?;

        if number == 0 {
            return Err(LedgerError::HeaderRow);
        }

        let index =
            usize::try_from(number).map_err(|_| LedgerError::InvalidIndex(input.to_string()))?;
        self.check_index(index)?;
        Ok(index)
    }

    /// Get the record at a positional index
    pub fn get(&self, index: usize) -> LedgerResult<&ExpenseRecord> {
        self.check_index(index)?;
        Ok(&self.records[index - 1])
    }

    /// Remove the record at a positional index, shifting later rows down
    pub fn remove(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        self.check_index(index)?;
        Ok(self.records.remove(index - 1))
    }

    /// Replace the record at a positional index, returning the old one
    pub fn replace(&mut self, index: usize, record: ExpenseRecord) -> LedgerResult<ExpenseRecord> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.records[index - 1], record))
    }

    /// Sum the amount column
    ///
    /// Amounts that do not parse, or would overflow the sum, are left out.
    pub fn total(&self) -> Decimal {
        self.records
            .iter()
            .filter_map(ExpenseRecord::parsed_amount)
            .fold(Decimal::ZERO, |sum, amount| sum.checked_add(amount).unwrap_or(sum))
    }

    fn check_index(&self, index: usize) -> LedgerResult<()> {
        if index == 0 {
            return Err(LedgerError::HeaderRow);
        }
        if index >= self.row_count() {
            return Err(LedgerError::InvalidIndex(index.to_string()));
        }
        Ok(())
    }
}
