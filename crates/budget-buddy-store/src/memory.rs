//! In-memory storage implementation.
//!
//! Nothing is persisted; all data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use budget_buddy_core::{Expense, ExpenseId, Scope, Settings, UserId};

use crate::error::{Result, StoreError};
use crate::{sort_newest_first, Store};

/// Map-backed storage implementation.
#[derive(Default)]
pub struct MemoryStore {
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
    settings: RwLock<HashMap<UserId, Settings>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| StoreError::Database("lock poisoned".into()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| StoreError::Database("lock poisoned".into()))
}

impl Store for MemoryStore {
    fn put_expense(&self, expense: &Expense) -> Result<()> {
        write(&self.expenses)?.insert(expense.id, expense.clone());
        Ok(())
    }

    fn get_expense(&self, expense_id: &ExpenseId) -> Result<Option<Expense>> {
        Ok(read(&self.expenses)?.get(expense_id).cloned())
    }

    fn list_expenses(&self, scope: &Scope) -> Result<Vec<Expense>> {
        let mut expenses: Vec<Expense> = read(&self.expenses)?
            .values()
            .filter(|e| scope.includes(e))
            .cloned()
            .collect();

        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    fn delete_expense(&self, expense_id: &ExpenseId, scope: &Scope) -> Result<bool> {
        let mut expenses = write(&self.expenses)?;

        let in_scope = expenses
            .get(expense_id)
            .is_some_and(|expense| scope.includes(expense));
        if in_scope {
            expenses.remove(expense_id);
        }

        Ok(in_scope)
    }

    fn put_settings(&self, settings: &Settings) -> Result<()> {
        write(&self.settings)?.insert(settings.user_id.clone(), settings.clone());
        Ok(())
    }

    fn get_settings(&self, user_id: &UserId) -> Result<Option<Settings>> {
        Ok(read(&self.settings)?.get(user_id).cloned())
    }
}
