//! Application state.

use std::sync::Arc;

use budget_buddy_store::Store;

use crate::config::ServiceConfig;
use crate::identity::{resolver_for, IdentityResolver};
use crate::services::{ExpenseService, SettingsService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Resolves the caller from request headers.
    pub identity: Arc<dyn IdentityResolver>,

    /// Expense operations.
    pub expenses: ExpenseService,

    /// Settings operations.
    pub settings: SettingsService,
}

impl AppState {
    /// Create a new application state around an opened store.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        let identity = resolver_for(config.identity_mode);

        Self {
            identity,
            expenses: ExpenseService::new(Arc::clone(&store)),
            settings: SettingsService::new(store),
            config,
        }
    }

    /// Replace the identity resolver.
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityResolver>) -> Self {
        self.identity = identity;
        self
    }
}
