//! Identity mode integration tests.

mod common;

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use common::{as_user, TestHarness, USER_ID};
use serde_json::{json, Value};

use budget_buddy_core::{Scope, UserId};
use budget_buddy_service::{ApiError, Caller, IdentityMode, IdentityResolver};

#[tokio::test]
async fn legacy_mode_accepts_missing_header() {
    let harness = TestHarness::with_mode(IdentityMode::Legacy);

    harness
        .server
        .post("/api/expenses")
        .json(&json!({"description": "Bus", "amount": 2.75}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness.server.get("/api/expenses").await;
    response.assert_status_ok();
    let expenses: Vec<Value> = response.json();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["description"], "Bus");
}

#[tokio::test]
async fn legacy_mode_shares_data_between_users() {
    let harness = TestHarness::with_mode(IdentityMode::Legacy);

    let response = as_user(harness.server.post("/api/expenses"), "u1")
        .json(&json!({"category": "Food", "description": "Lunch", "amount": 12}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_str().unwrap().to_string();

    let listed: Vec<Value> = as_user(harness.server.get("/api/expenses"), "u2")
        .await
        .json();
    assert_eq!(listed.len(), 1);

    let summary: Value = harness.server.get("/api/expenses/summary").await.json();
    assert_eq!(summary, json!([{"category": "Food", "total": 12.0}]));

    as_user(harness.server.delete(&format!("/api/expenses/{id}")), "u2")
        .await
        .assert_status_ok();

    let listed: Vec<Value> = harness.server.get("/api/expenses").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn legacy_mode_still_rejects_malformed_input() {
    let harness = TestHarness::with_mode(IdentityMode::Legacy);

    harness
        .server
        .delete("/api/expenses/nope")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    harness
        .server
        .post("/api/settings")
        .json(&json!({"paycheck": "nope"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn legacy_mode_anonymous_settings_are_shared() {
    let harness = TestHarness::with_mode(IdentityMode::Legacy);

    harness
        .server
        .post("/api/settings")
        .json(&json!({"paycheck": 1500, "savingsPercent": 12}))
        .await
        .assert_status_ok();

    let settings: Value = harness.server.get("/api/settings").await.json();
    assert_eq!(settings, json!({"paycheck": 1500.0, "savingsPercent": 12.0}));
}

#[tokio::test]
async fn legacy_mode_settings_are_shared_between_users() {
    let harness = TestHarness::with_mode(IdentityMode::Legacy);

    as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 2200, "savingsPercent": 8}))
        .await
        .assert_status_ok();

    let settings: Value = as_user(harness.server.get("/api/settings"), "u2")
        .await
        .json();
    assert_eq!(settings, json!({"paycheck": 2200.0, "savingsPercent": 8.0}));

    let settings: Value = harness.server.get("/api/settings").await.json();
    assert_eq!(settings, json!({"paycheck": 2200.0, "savingsPercent": 8.0}));
}

#[tokio::test]
async fn latin1_identity_is_accepted() {
    let harness = TestHarness::new();
    let latin1 = || {
        (
            HeaderName::from_static(USER_ID),
            HeaderValue::from_bytes(b"jos\xe9").expect("valid header bytes"),
        )
    };

    let (name, value) = latin1();
    harness
        .server
        .post("/api/expenses")
        .add_header(name, value)
        .json(&json!({"description": "Cafe", "amount": 3}))
        .await
        .assert_status(StatusCode::CREATED);

    let (name, value) = latin1();
    let response = harness.server.get("/api/expenses").add_header(name, value).await;
    response.assert_status_ok();
    let listed: Vec<Value> = response.json();
    assert_eq!(listed.len(), 1);

    assert!(as_user(harness.server.get("/api/expenses"), "jos")
        .await
        .json::<Vec<Value>>()
        .is_empty());
}

/// Resolves every request to a fixed user, ignoring headers.
struct FixedIdentity(&'static str);

impl IdentityResolver for FixedIdentity {
    fn resolve(&self, _headers: &HeaderMap) -> Result<Caller, ApiError> {
        let user_id: UserId = self
            .0
            .parse()
            .map_err(|_| ApiError::MissingIdentity)?;
        Ok(Caller {
            scope: Scope::User(user_id.clone()),
            user_id,
        })
    }
}

#[tokio::test]
async fn custom_resolver_replaces_header_identity() {
    let harness = TestHarness::build(IdentityMode::Strict, |state| {
        state.with_identity(std::sync::Arc::new(FixedIdentity("service-account")))
    });

    harness
        .server
        .post("/api/expenses")
        .json(&json!({"description": "Hosting", "amount": 20}))
        .await
        .assert_status(StatusCode::CREATED);

    let listed: Vec<Value> = as_user(harness.server.get("/api/expenses"), "someone-else")
        .await
        .json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["description"], "Hosting");
}
