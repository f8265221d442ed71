//! Expense handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use budget_buddy_core::{to_major_units, CategoryTotal, Expense};

use crate::error::ApiError;
use crate::handlers::body_object;
use crate::identity::Caller;
use crate::state::AppState;

/// Expense response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Amount in dollars.
    pub amount: f64,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            category: expense.category.clone(),
            description: expense.description.clone(),
            amount: to_major_units(expense.amount_cents),
            created_at: expense.created_at.to_rfc3339(),
        }
    }
}

/// Category total response.
#[derive(Debug, Serialize)]
pub struct CategoryTotalResponse {
    /// Category name.
    pub category: String,
    /// Total in dollars.
    pub total: f64,
}

impl From<&CategoryTotal> for CategoryTotalResponse {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            category: total.category.clone(),
            total: to_major_units(total.total_cents),
        }
    }
}

/// Create expense response.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// ID of the new expense.
    pub id: String,
}

/// Delete expense response.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// ID of the deleted expense, as requested.
    pub deleted: String,
}

/// List the caller's expenses, newest first.
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = state.expenses.list(&caller)?;

    tracing::debug!(user_id = %caller.user_id, count = expenses.len(), "Listed expenses");

    Ok(Json(expenses.iter().map(ExpenseResponse::from).collect()))
}

/// Record a new expense.
///
/// Body: `{"category"?, "description", "amount"}`.
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let body = body_object(body)?;

    let expense = state.expenses.add(
        &caller,
        body.get("category"),
        body.get("description"),
        body.get("amount"),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: expense.id.to_string(),
        }),
    ))
}

/// Delete one of the caller's expenses.
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.expenses.delete(&caller, &id)?;

    Ok(Json(DeletedResponse { deleted: id }))
}

/// Totals per category, largest first.
pub async fn expenses_summary(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<CategoryTotalResponse>>, ApiError> {
    let totals = state.expenses.summarize(&caller)?;

    Ok(Json(totals.iter().map(CategoryTotalResponse::from).collect()))
}
