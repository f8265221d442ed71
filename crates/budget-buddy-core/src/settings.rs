//! Per-user paycheck and savings settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BudgetError, Result};
use crate::ids::UserId;
use crate::money::{parse_number, to_minor_units};

/// A user's settings. At most one record exists per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Owner and unique key.
    pub user_id: UserId,

    /// Paycheck in cents.
    pub paycheck_cents: i64,

    /// Share of the paycheck set aside for savings. Not range-checked.
    pub savings_percent: f64,

    /// Last time the record was written.
    pub updated_at: DateTime<Utc>,
}

impl Settings {
    /// Build a settings record for `user_id` from a validated update.
    #[must_use]
    pub fn new(user_id: UserId, update: SettingsUpdate) -> Self {
        Self {
            user_id,
            paycheck_cents: update.paycheck_cents,
            savings_percent: update.savings_percent,
            updated_at: Utc::now(),
        }
    }
}

/// Validated settings input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsUpdate {
    /// Paycheck in cents.
    pub paycheck_cents: i64,
    /// Savings percent as given.
    pub savings_percent: f64,
}

impl SettingsUpdate {
    /// Validate raw request fields. Absent fields default to zero.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::InvalidSettings`] if a present field is not a
    /// number.
    pub fn parse(paycheck: Option<&Value>, savings_percent: Option<&Value>) -> Result<Self> {
        let number = |value: Option<&Value>| match value {
            None => Ok(0.0),
            Some(v) => parse_number(v).ok_or(BudgetError::InvalidSettings),
        };

        Ok(Self {
            paycheck_cents: to_minor_units(number(paycheck)?)
                .ok_or(BudgetError::InvalidSettings)?,
            savings_percent: number(savings_percent)?,
        })
    }
}
