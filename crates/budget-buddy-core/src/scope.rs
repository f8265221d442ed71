//! Query scoping.

use crate::expense::Expense;
use crate::ids::UserId;

/// Which records a query may see or touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Only records owned by this user.
    User(UserId),
    /// Every record regardless of owner. Used by the legacy identity mode.
    Global,
}

impl Scope {
    /// Whether `expense` falls inside this scope.
    #[must_use]
    pub fn includes(&self, expense: &Expense) -> bool {
        match self {
            Self::User(user_id) => expense.user_id == *user_id,
            Self::Global => true,
        }
    }
}
