//! Health and landing page integration tests.

mod common;

use common::TestHarness;

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "budget-buddy");
}

#[tokio::test]
async fn landing_page_needs_no_identity() {
    let harness = TestHarness::new();

    let response = harness.server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Budget Buddy"));
}
