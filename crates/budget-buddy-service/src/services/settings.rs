//! Settings service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use budget_buddy_core::{to_major_units, Settings, SettingsUpdate};
use budget_buddy_store::Store;

use crate::error::ApiError;
use crate::identity::Caller;

/// Paycheck and savings settings as returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    /// Paycheck in dollars.
    pub paycheck: f64,
    /// Savings percent as stored.
    pub savings_percent: f64,
}

impl From<&Settings> for SettingsView {
    fn from(settings: &Settings) -> Self {
        Self {
            paycheck: to_major_units(settings.paycheck_cents),
            savings_percent: settings.savings_percent,
        }
    }
}

/// Reads and upserts per-user settings.
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn Store>,
}

impl SettingsService {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validate and save the caller's settings, replacing any previous values.
    pub fn save(
        &self,
        caller: &Caller,
        paycheck: Option<&Value>,
        savings_percent: Option<&Value>,
    ) -> Result<Settings, ApiError> {
        let update = SettingsUpdate::parse(paycheck, savings_percent)?;
        let settings = Settings::new(caller.settings_owner(), update);

        self.store.put_settings(&settings)?;

        tracing::info!(
            user_id = %caller.user_id,
            owner = %settings.user_id,
            paycheck_cents = settings.paycheck_cents,
            savings_percent = settings.savings_percent,
            "Settings saved"
        );

        Ok(settings)
    }

    /// The caller's settings, or zeroes if none were saved.
    pub fn get(&self, caller: &Caller) -> Result<SettingsView, ApiError> {
        let view = self
            .store
            .get_settings(&caller.settings_owner())?
            .as_ref()
            .map_or(
                SettingsView {
                    paycheck: 0.0,
                    savings_percent: 0.0,
                },
                SettingsView::from,
            );

        Ok(view)
    }
}
