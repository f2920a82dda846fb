//! Interactive console front end
//!
//! The menu loop, the category selector, and the prompt sequences of each
//! expense operation, all written against a generic `Console`.

pub mod category;
pub mod console;
pub mod expense;
pub mod menu;

pub use category::{choose_category, resolve_category, select_category};
pub use console::{is_go_back, Console, GO_BACK_TOKEN};
pub use expense::{add_expense, delete_expense, edit_expense, total_expenses, view_expenses};
pub use menu::{run_menu, MenuChoice, MenuState};
