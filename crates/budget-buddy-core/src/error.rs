//! Error types for budget-buddy.
//!
//! The display strings double as the client-facing error messages.

use crate::ids::IdError;

/// Result type for budget-buddy validation.
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Validation failures for incoming expense and settings data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    /// The expense amount is missing or not a number.
    #[error("Invalid amount")]
    InvalidAmount,

    /// The description is blank or the amount is not positive.
    #[error("Description required and amount must be > 0")]
    InvalidInput,

    /// Paycheck or savings percent is not a number.
    #[error("Invalid settings values")]
    InvalidSettings,

    /// The identifier could not be parsed.
    #[error("Invalid id")]
    InvalidId(#[from] IdError),
}
