//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Expense records, keyed by `expense_id` (ULID).
    pub const EXPENSES: &str = "expenses";

    /// Index: expenses by owner, keyed by `user_id || 0x00 || expense_id`.
    /// Value is empty (index only).
    pub const EXPENSES_BY_USER: &str = "expenses_by_user";

    /// Settings records, keyed by `user_id`.
    pub const SETTINGS: &str = "settings";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::EXPENSES, cf::EXPENSES_BY_USER, cf::SETTINGS]
}
