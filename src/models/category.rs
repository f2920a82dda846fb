//! Expense categories
//!
//! The category list offered by the selector is fixed. Records may still
//! carry any text as their category; the list only drives selection.

use std::fmt;

/// Category returned when a selection cannot be resolved
pub const FALLBACK_CATEGORY: &str = "Other";

/// The enumerated expense categories, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Shopping,
    Entertainment,
    Other,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Food,
            Category::Travel,
            Category::Bills,
            Category::Shopping,
            Category::Entertainment,
            Category::Other,
        ]
    }

    /// Look up a category by its 1-based menu number
    pub fn from_number(number: i64) -> Option<Category> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }

    /// The text stored in the ledger for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Other => FALLBACK_CATEGORY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_are_one_based() {
        assert_eq!(Category::from_number(1), Some(Category::Food));
        assert_eq!(Category::from_number(6), Some(Category::Other));
        assert_eq!(Category::from_number(0), None);
        assert_eq!(Category::from_number(7), None);
        assert_eq!(Category::from_number(-1), None);
    }

    #[test]
    fn test_fallback_is_listed() {
        assert_eq!(Category::all().len(), 6);
        assert_eq!(Category::Other.name(), FALLBACK_CATEGORY);
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }
}
