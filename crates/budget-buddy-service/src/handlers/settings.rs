//! Settings handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::handlers::body_object;
use crate::identity::Caller;
use crate::services::SettingsView;
use crate::state::AppState;

/// Save settings response.
#[derive(Debug, Serialize)]
pub struct SavedResponse {
    /// Always `true`.
    pub ok: bool,
}

/// Save the caller's paycheck and savings percent.
///
/// Body: `{"paycheck"?, "savingsPercent"?}`. Absent fields are saved as zero.
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SavedResponse>, ApiError> {
    let body = body_object(body)?;

    state
        .settings
        .save(&caller, body.get("paycheck"), body.get("savingsPercent"))?;

    Ok(Json(SavedResponse { ok: true }))
}

/// Get the caller's settings.
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<SettingsView>, ApiError> {
    Ok(Json(state.settings.get(&caller)?))
}
