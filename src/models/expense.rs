//! Expense record model
//!
//! Every field is free text and stored exactly as entered. Only the amount
//! is ever interpreted, and only when totalling.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Column names of the ledger header row
pub const HEADER_FIELDS: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Conventionally `YYYY-MM-DD`, not validated
    pub date: String,
    pub category: String,
    /// Conventionally a decimal number, not validated
    pub amount: String,
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new record
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// The fixed header row
    pub fn header() -> Self {
        let [date, category, amount, description] = HEADER_FIELDS;
        Self::new(date, category, amount, description)
    }

    /// Build a record from a row of fields
    ///
    /// Missing trailing fields become empty text; fields past the fourth are
    /// dropped.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default().to_string();
        Self {
            date: next(),
            category: next(),
            amount: next(),
            description: next(),
        }
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.description.as_str(),
        ]
    }

    /// The amount as a decimal, if it parses
    pub fn parsed_amount(&self) -> Option<Decimal> {
        Decimal::from_str(self.amount.trim()).ok()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_fields_pads_and_truncates() {
        let short = ExpenseRecord::from_fields(["2026-01-02", "Food"]);
        assert_eq!(short, ExpenseRecord::new("2026-01-02", "Food", "", ""));

        let long = ExpenseRecord::from_fields(["a", "b", "c", "d", "e"]);
        assert_eq!(long, ExpenseRecord::new("a", "b", "c", "d"));
    }

    #[test]
    fn test_parsed_amount() {
        let record = ExpenseRecord::new("", "", " 12.50 ", "");
        assert_eq!(record.parsed_amount(), Some(dec!(12.50)));

        let record = ExpenseRecord::new("", "", "abc", "");
        assert_eq!(record.parsed_amount(), None);

        let record = ExpenseRecord::new("", "", "", "");
        assert_eq!(record.parsed_amount(), None);
    }

    #[test]
    fn test_display_is_tab_joined() {
        let record = ExpenseRecord::new("2026-03-04", "Bills", "40", "Phone");
        assert_eq!(record.to_string(), "2026-03-04\tBills\t40\tPhone");
        assert_eq!(
            ExpenseRecord::header().to_string(),
            "Date\tCategory\tAmount\tDescription"
        );
    }
}
