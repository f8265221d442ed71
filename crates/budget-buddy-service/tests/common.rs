//! Common test utilities for budget-buddy integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use axum_test::{TestRequest, TestServer};
use tempfile::TempDir;

use budget_buddy_service::{create_router, AppState, IdentityMode, ServiceConfig};
use budget_buddy_store::RocksStore;

/// Header carrying the caller identity.
pub const USER_ID: &str = "x-user-id";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new strict-mode test harness with a fresh database.
    pub fn new() -> Self {
        Self::with_mode(IdentityMode::Strict)
    }

    /// Create a test harness using the given identity mode.
    pub fn with_mode(identity_mode: IdentityMode) -> Self {
        Self::build(identity_mode, |state| state)
    }

    /// Create a test harness, letting the caller adjust the app state.
    pub fn build(identity_mode: IdentityMode, customize: impl FnOnce(AppState) -> AppState) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            identity_mode,
            ..ServiceConfig::default()
        };

        let state = customize(AppState::new(Arc::new(store), config));
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach an `X-User-Id` header to a request.
pub fn as_user(request: TestRequest, user_id: &str) -> TestRequest {
    request.add_header(
        HeaderName::from_static(USER_ID),
        HeaderValue::from_str(user_id).expect("valid header value"),
    )
}
