//! Expense and settings operations.
//!
//! Services own a shared [`Store`](budget_buddy_store::Store) handle injected at
//! construction and translate storage results into API outcomes. They are
//! cheap to clone.

pub mod expenses;
pub mod settings;

pub use expenses::ExpenseService;
pub use settings::{SettingsService, SettingsView};
