//! Category selector
//!
//! Shows the numbered category list and resolves the answer to a category.

use std::io::{BufRead, Write};

use super::console::{is_go_back, Console};
use crate::display::format_category_menu;
use crate::error::LedgerResult;
use crate::models::{Category, Selection, FALLBACK_CATEGORY};

/// Resolve a category answer
///
/// With a `default`, an empty answer confirms the default as-is, even if it
/// is empty or not one of the listed categories. Otherwise the answer must be
/// a listed menu number.
pub fn resolve_category(input: &str, default: Option<&str>) -> Selection<String> {
    if is_go_back(input) {
        return Selection::Aborted;
    }

    let input = input.trim();
    if let Some(default) = default {
        if input.is_empty() {
            return Selection::Confirmed(default.to_string());
        }
    }

    match input.parse::<i64>().ok().and_then(Category::from_number) {
        Some(category) => Selection::Confirmed(category.name().to_string()),
        None => Selection::Invalid(input.to_string()),
    }
}

/// Show the category list and read one answer
///
/// End of input counts as going back.
pub fn choose_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default: Option<&str>,
) -> LedgerResult<Selection<String>> {
    console.say("\nChoose a category (or 'B' to go back):")?;
    console.write(&format_category_menu())?;

    let prompt = match default {
        Some("") => "Enter number (press Enter to keep it empty): ".to_string(),
        Some(default) => format!("Enter number (default {}): ", default),
        None => "Enter number: ".to_string(),
    };

    Ok(match console.read_line(&prompt)? {
        Some(answer) => resolve_category(&answer, default),
        None => Selection::Aborted,
    })
}

/// Choose a category, falling back to "Other" on an invalid answer
///
/// Returns `None` if the user went back.
pub fn select_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default: Option<&str>,
) -> LedgerResult<Option<String>> {
    match choose_category(console, default)? {
        Selection::Confirmed(category) => Ok(Some(category)),
        Selection::Aborted => Ok(None),
        Selection::Invalid(answer) => {
            console.say(format!(
                "Invalid choice '{}', defaulting to '{}'",
                answer, FALLBACK_CATEGORY
            ))?;
            Ok(Some(FALLBACK_CATEGORY.to_string()))
        }
    }
}
