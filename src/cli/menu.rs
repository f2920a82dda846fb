//! Menu loop
//!
//! Shows the six-option menu and runs one operation at a time until the
//! user exits. Operation errors are reported and the menu is shown again;
//! only a broken console ends the loop with an error.

use std::io::{BufRead, Write};

use super::console::Console;
use super::expense::{add_expense, delete_expense, edit_expense, total_expenses, view_expenses};
use crate::error::LedgerResult;
use crate::services::ExpenseService;

const MENU: &str = "\n Personal Expense Tracker
1. Add Expense
2. View All Expenses
3. View Total Expenses
4. Delete Expense
5. Edit Expense
6. Exit
";

/// A menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Total,
    Delete,
    Edit,
    Exit,
}

impl MenuChoice {
    /// Parse a menu answer (surrounding whitespace ignored)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Total),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Edit),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    ShowingMenu,
    Running(MenuChoice),
    Exiting,
}

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
    date_format: &str,
) -> LedgerResult<()> {
    let mut state = MenuState::ShowingMenu;

    loop {
        state = match state {
            MenuState::ShowingMenu => {
                console.write(MENU)?;
                match console.read_line("Choose an option: ")? {
                    None => MenuState::Exiting,
                    Some(answer) => match MenuChoice::parse(&answer) {
                        Some(MenuChoice::Exit) => MenuState::Exiting,
                        Some(choice) => MenuState::Running(choice),
                        None => {
                            console.say("Invalid choice, please try again.")?;
                            MenuState::ShowingMenu
                        }
                    },
                }
            }
            MenuState::Running(choice) => {
                if let Err(e) = dispatch(console, service, date_format, choice) {
                    if e.is_terminal() {
                        return Err(e);
                    }
                    console.say(format!("Error: {}", e))?;
                }
                MenuState::ShowingMenu
            }
            MenuState::Exiting => {
                console.say("Goodbye!")?;
                return Ok(());
            }
        };
    }
}

fn dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &ExpenseService<'_>,
    date_format: &str,
    choice: MenuChoice,
) -> LedgerResult<()> {
    match choice {
        MenuChoice::Add => add_expense(console, service, date_format),
        MenuChoice::View => view_expenses(console, service),
        MenuChoice::Total => total_expenses(console, service),
        MenuChoice::Delete => delete_expense(console, service),
        MenuChoice::Edit => edit_expense(console, service),
        MenuChoice::Exit => Ok(()),
    }
}
