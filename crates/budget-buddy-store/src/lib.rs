//! Storage layer for budget-buddy.
//!
//! This crate persists expenses and per-user settings behind the [`Store`]
//! trait. Two backends are provided:
//!
//! - [`RocksStore`] (feature `rocksdb-backend`, on by default): column
//!   families for expenses, a per-user expense index, and settings.
//! - [`MemoryStore`]: process-local maps, for tests and throwaway runs.
//!
//! # Example
//!
//! ```no_run
//! use budget_buddy_core::{Expense, NewExpense, Scope, UserId};
//! use budget_buddy_store::{RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/budget-buddy-db").unwrap();
//!
//! let user_id: UserId = "u1".parse().unwrap();
//! let expense = Expense::new(
//!     user_id.clone(),
//!     NewExpense {
//!         category: "Food".into(),
//!         description: "Coffee".into(),
//!         amount_cents: 450,
//!     },
//! );
//! store.put_expense(&expense).unwrap();
//!
//! let mine = store.list_expenses(&Scope::User(user_id)).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

#[cfg(feature = "rocksdb-backend")]
pub mod keys;
#[cfg(feature = "rocksdb-backend")]
pub mod rocks;
#[cfg(feature = "rocksdb-backend")]
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksStore;

use budget_buddy_core::{Expense, ExpenseId, Scope, Settings, UserId};

/// The storage trait defining all database operations.
///
/// Implementations must be safe to share across request handlers.
pub trait Store: Send + Sync {
    // =========================================================================
    // Expense Operations
    // =========================================================================

    /// Insert an expense record.
    ///
    /// This also maintains the per-user index.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_expense(&self, expense: &Expense) -> Result<()>;

    /// Get an expense by ID, regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_expense(&self, expense_id: &ExpenseId) -> Result<Option<Expense>>;

    /// List expenses visible in `scope`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_expenses(&self, scope: &Scope) -> Result<Vec<Expense>>;

    /// Delete an expense if it exists inside `scope`.
    ///
    /// Returns `false` when nothing was removed, either because the ID is
    /// unknown or because the expense belongs to someone outside the scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn delete_expense(&self, expense_id: &ExpenseId, scope: &Scope) -> Result<bool>;

    // =========================================================================
    // Settings Operations
    // =========================================================================

    /// Insert or replace the settings record for `settings.user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_settings(&self, settings: &Settings) -> Result<()>;

    /// Get the settings for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_settings(&self, user_id: &UserId) -> Result<Option<Settings>>;
}

/// Order expenses newest first, falling back to ID order for equal timestamps.
pub(crate) fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
