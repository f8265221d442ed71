//! Core types and utilities for budget-buddy.
//!
//! This crate provides the foundational types used by the store and the HTTP
//! service:
//!
//! - **Identifiers**: `UserId`, `ExpenseId`
//! - **Scoping**: `Scope`
//! - **Expenses**: `Expense`, `NewExpense`
//! - **Settings**: `Settings`, `SettingsUpdate`
//! - **Aggregation**: `CategoryTotal`, `summarize`
//!
//! # Money
//!
//! Amounts arrive as floating-point dollars and are stored as `i64` cents to
//! avoid floating point drift. See [`money`] for the conversion rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expense;
pub mod ids;
pub mod money;
pub mod scope;
pub mod settings;
pub mod summary;

pub use error::{BudgetError, Result};
pub use expense::{Expense, NewExpense, DEFAULT_CATEGORY};
pub use ids::{ExpenseId, IdError, UserId};
pub use money::{parse_number, to_major_units, to_minor_units};
pub use scope::Scope;
pub use settings::{Settings, SettingsUpdate};
pub use summary::{summarize, CategoryTotal};
