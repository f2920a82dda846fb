//! Interactive expense operations
//!
//! Each operation prompts step by step. Going back at any prompt returns to
//! the menu without writing anything.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use chrono::Local;

use super::category::select_category;
use super::console::Console;
use crate::display::{format_ledger, format_total};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Ledger};
use crate::services::ExpenseService;

/// Prompt for a new expense and append it
pub fn add_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
    date_format: &str,
) -> LedgerResult<()> {
    console.say("\n--- Add Expense (type 'B' to go back) ---")?;

    let Some(date) = console.ask("Enter date (YYYY-MM-DD) or press Enter for today: ")? else {
        return Ok(());
    };
    let date = if date.trim().is_empty() {
        today(date_format)?
    } else {
        date
    };

    let Some(category) = select_category(console, None)? else {
        return Ok(());
    };

    let Some(amount) = console.ask("Enter amount: ")? else {
        return Ok(());
    };

    let Some(description) = console.ask("Enter description: ")? else {
        return Ok(());
    };

    let saved = service.add(&ExpenseRecord::new(date, category, amount, description))?;
    console.say("Expense added successfully!")?;
    warn_unaudited(console, saved.audit_error)
}

/// List every row of the ledger, header included
pub fn view_expenses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
) -> LedgerResult<()> {
    let ledger = service.list()?;
    console.say("\n--- All Expenses ---")?;
    console.write(&format_ledger(&ledger))?;
    console.pause()
}

/// Print the sum of all numeric amounts
pub fn total_expenses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
) -> LedgerResult<()> {
    let total = service.total()?;
    console.say("\n--- Total Expenses ---")?;
    console.write(&format_total(total))?;
    console.pause()
}

/// Show the ledger and delete the record at the chosen index
pub fn delete_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
) -> LedgerResult<()> {
    let mut ledger = service.list()?;

    console.say("\n--- Delete Expense (type 'B' to go back) ---")?;
    console.write(&format_ledger(&ledger))?;

    let Some(index) = prompt_index(console, &ledger, "delete")? else {
        return Ok(());
    };

    let saved = service.delete(&mut ledger, index)?;
    console.say(format!("Deleted: {}", saved.value))?;
    warn_unaudited(console, saved.audit_error)
}

/// Show the ledger and edit the record at the chosen index field by field
///
/// An empty answer keeps the current value.
pub fn edit_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
) -> LedgerResult<()> {
    let mut ledger = service.list()?;

    console.say("\n--- Edit Expense (type 'B' to go back) ---")?;
    console.write(&format_ledger(&ledger))?;

    let Some(index) = prompt_index(console, &ledger, "edit")? else {
        return Ok(());
    };
    let current = ledger.get(index)?.clone();

    console.say("Press Enter to keep the current value.")?;

    let Some(date) = console.ask(&format!("Date ({}): ", current.date))? else {
        return Ok(());
    };

    let Some(category) = select_category(console, Some(current.category.as_str()))? else {
        return Ok(());
    };

    let Some(amount) = console.ask(&format!("Amount ({}): ", current.amount))? else {
        return Ok(());
    };

    let Some(description) = console.ask(&format!("Description ({}): ", current.description))?
    else {
        return Ok(());
    };

    let record = ExpenseRecord::new(
        keep_if_empty(date, &current.date),
        category,
        keep_if_empty(amount, &current.amount),
        keep_if_empty(description, &current.description),
    );

    let saved = service.update(&mut ledger, index, record)?;
    console.say("Expense updated successfully!")?;
    warn_unaudited(console, saved.audit_error)
}

/// Ask for a positional index, reporting rejected input
///
/// Returns `None` if the user went back or the index was rejected.
fn prompt_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &Ledger,
    verb: &str,
) -> LedgerResult<Option<usize>> {
    let Some(answer) = console.ask(&format!("Enter the index of the expense to {}: ", verb))? else {
        return Ok(None);
    };

    match ledger.resolve_index(&answer) {
        Ok(index) => Ok(Some(index)),
        Err(LedgerError::HeaderRow) => {
            console.say(format!("You cannot {} the header row!", verb))?;
            Ok(None)
        }
        Err(LedgerError::InvalidIndex(_)) => {
            console.say("Invalid index!")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// The change is already saved; only the audit entry is missing
fn warn_unaudited<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    audit_error: Option<LedgerError>,
) -> LedgerResult<()> {
    match audit_error {
        Some(e) => console.say(format!("Warning: change saved but not audited: {}", e)),
        None => Ok(()),
    }
}

fn keep_if_empty(answer: String, current: &str) -> String {
    if answer.is_empty() {
        current.to_string()
    } else {
        answer
    }
}

/// Today's date in the configured format
fn today(date_format: &str) -> LedgerResult<String> {
    let mut date = String::new();
    write!(date, "{}", Local::now().format(date_format))
        .map_err(|_| LedgerError::Config(format!("Invalid date format '{}'", date_format)))?;
    Ok(date)
}
