//! Budget Buddy HTTP API Service.
//!
//! This crate provides the HTTP API for the budget-buddy expense tracker:
//!
//! - Expense recording, listing and deletion
//! - Spending totals by category
//! - Per-user paycheck and savings settings
//!
//! # Identity
//!
//! Callers identify themselves with the `X-User-Id` header. The header is
//! trusted as-is; see [`identity`] for the available modes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for Axum even when the store is not

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{IdentityMode, ServiceConfig, StoreBackend};
pub use error::ApiError;
pub use identity::{Caller, IdentityResolver, LegacyIdentity, StrictIdentity};
pub use routes::create_router;
pub use state::AppState;
