//! Settings endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::{as_user, TestHarness};
use serde_json::{json, Value};

async fn get_settings(harness: &TestHarness, user: &str) -> Value {
    let response = as_user(harness.server.get("/api/settings"), user).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn settings_default_to_zero() {
    let harness = TestHarness::new();

    let settings = get_settings(&harness, "u1").await;

    assert_eq!(settings, json!({"paycheck": 0.0, "savingsPercent": 0.0}));
}

#[tokio::test]
async fn save_then_get_returns_latest() {
    let harness = TestHarness::new();

    for body in [
        json!({"paycheck": 2000, "savingsPercent": 10}),
        json!({"paycheck": 2500.5, "savingsPercent": "15"}),
    ] {
        let response = as_user(harness.server.post("/api/settings"), "u1")
            .json(&body)
            .await;
        response.assert_status_ok();
        let saved: Value = response.json();
        assert_eq!(saved, json!({"ok": true}));
    }

    let settings = get_settings(&harness, "u1").await;
    assert_eq!(settings, json!({"paycheck": 2500.5, "savingsPercent": 15.0}));
}

#[tokio::test]
async fn absent_fields_are_saved_as_zero() {
    let harness = TestHarness::new();

    as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 1800, "savingsPercent": 20}))
        .await
        .assert_status_ok();
    as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 1900}))
        .await
        .assert_status_ok();

    let settings = get_settings(&harness, "u1").await;
    assert_eq!(settings, json!({"paycheck": 1900.0, "savingsPercent": 0.0}));
}

#[tokio::test]
async fn settings_are_per_user() {
    let harness = TestHarness::new();

    as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 3000, "savingsPercent": 25}))
        .await
        .assert_status_ok();

    let other = get_settings(&harness, "u2").await;
    assert_eq!(other, json!({"paycheck": 0.0, "savingsPercent": 0.0}));
}

#[tokio::test]
async fn invalid_values_are_rejected() {
    let harness = TestHarness::new();

    as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 1000, "savingsPercent": 5}))
        .await
        .assert_status_ok();

    for body in [
        json!({"paycheck": "lots", "savingsPercent": 10}),
        json!({"paycheck": 1000, "savingsPercent": true}),
    ] {
        let response = as_user(harness.server.post("/api/settings"), "u1")
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error, json!({"error": "Invalid settings values"}));
    }

    let settings = get_settings(&harness, "u1").await;
    assert_eq!(settings, json!({"paycheck": 1000.0, "savingsPercent": 5.0}));
}

#[tokio::test]
async fn paycheck_beyond_cents_range_is_rejected() {
    let harness = TestHarness::new();

    let response = as_user(harness.server.post("/api/settings"), "u1")
        .json(&json!({"paycheck": 1e20, "savingsPercent": 10}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error, json!({"error": "Invalid settings values"}));

    let settings = get_settings(&harness, "u1").await;
    assert_eq!(settings, json!({"paycheck": 0.0, "savingsPercent": 0.0}));
}

#[tokio::test]
async fn settings_require_identity() {
    let harness = TestHarness::new();

    harness.server.get("/api/settings").await.assert_status_unauthorized();
    harness
        .server
        .post("/api/settings")
        .json(&json!({"paycheck": 1}))
        .await
        .assert_status_unauthorized();
}
