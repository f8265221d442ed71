//! Expense service.

use std::sync::Arc;

use serde_json::Value;

use budget_buddy_core::{summarize, BudgetError, CategoryTotal, Expense, ExpenseId, NewExpense};
use budget_buddy_store::Store;

use crate::error::ApiError;
use crate::identity::Caller;

/// Records, lists, deletes and aggregates expenses.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn Store>,
}

impl ExpenseService {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Expenses visible to the caller, newest first.
    pub fn list(&self, caller: &Caller) -> Result<Vec<Expense>, ApiError> {
        Ok(self.store.list_expenses(&caller.scope)?)
    }

    /// Validate and record a new expense owned by the caller.
    pub fn add(
        &self,
        caller: &Caller,
        category: Option<&Value>,
        description: Option<&Value>,
        amount: Option<&Value>,
    ) -> Result<Expense, ApiError> {
        let input = NewExpense::parse(category, description, amount)?;
        let expense = Expense::new(caller.user_id.clone(), input);

        self.store.put_expense(&expense)?;

        tracing::info!(
            user_id = %caller.user_id,
            expense_id = %expense.id,
            category = %expense.category,
            amount_cents = expense.amount_cents,
            "Expense recorded"
        );

        Ok(expense)
    }

    /// Delete one of the caller's expenses by its string ID.
    pub fn delete(&self, caller: &Caller, raw_id: &str) -> Result<ExpenseId, ApiError> {
        let expense_id = raw_id.parse::<ExpenseId>().map_err(BudgetError::from)?;

        if !self.store.delete_expense(&expense_id, &caller.scope)? {
            tracing::debug!(user_id = %caller.user_id, expense_id = %expense_id, "Expense not found for delete");
            return Err(ApiError::NotFound);
        }

        tracing::info!(user_id = %caller.user_id, expense_id = %expense_id, "Expense deleted");

        Ok(expense_id)
    }

    /// Totals per category for the caller's expenses, largest first.
    pub fn summarize(&self, caller: &Caller) -> Result<Vec<CategoryTotal>, ApiError> {
        let expenses = self.store.list_expenses(&caller.scope)?;
        // Walk oldest first so ties keep insertion order.
        Ok(summarize(expenses.iter().rev()))
    }
}
