//! Expense records.
//!
//! An [`Expense`] is immutable once created; the only lifecycle transition
//! after creation is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BudgetError, Result};
use crate::ids::{ExpenseId, UserId};
use crate::money::{parse_number, to_minor_units};

/// Category assigned when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, time-ordered identifier.
    pub id: ExpenseId,

    /// Owner of the expense.
    pub user_id: UserId,

    /// Free-form category, trimmed.
    pub category: String,

    /// What the money was spent on, trimmed and non-empty.
    pub description: String,

    /// Amount in cents. Always positive.
    pub amount_cents: i64,

    /// When the expense was recorded.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense owned by `user_id`, stamped with the current time.
    #[must_use]
    pub fn new(user_id: UserId, input: NewExpense) -> Self {
        Self {
            id: ExpenseId::generate(),
            user_id,
            category: input.category,
            description: input.description,
            amount_cents: input.amount_cents,
            created_at: Utc::now(),
        }
    }
}

/// Validated input for a new expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Category, `"Other"` when none was given.
    pub category: String,
    /// Non-empty description.
    pub description: String,
    /// Positive amount in cents.
    pub amount_cents: i64,
}

impl NewExpense {
    /// Validate raw request fields.
    ///
    /// The amount is checked first: a missing or non-numeric amount is
    /// [`BudgetError::InvalidAmount`]. A blank description or a non-positive
    /// amount is [`BudgetError::InvalidInput`].
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn parse(
        category: Option<&Value>,
        description: Option<&Value>,
        amount: Option<&Value>,
    ) -> Result<Self> {
        let category = category
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let description = description.and_then(Value::as_str).map_or("", str::trim);

        let amount = amount
            .and_then(parse_number)
            .ok_or(BudgetError::InvalidAmount)?;

        if description.is_empty() || amount <= 0.0 {
            return Err(BudgetError::InvalidInput);
        }

        let amount_cents = to_minor_units(amount).ok_or(BudgetError::InvalidAmount)?;
        // Sub-cent amounts round to nothing.
        if amount_cents <= 0 {
            return Err(BudgetError::InvalidInput);
        }

        Ok(Self {
            category: category.to_string(),
            description: description.to_string(),
            amount_cents,
        })
    }
}
