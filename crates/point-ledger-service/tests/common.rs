//! Common test utilities for point-ledger integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;

use point_ledger_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Shared state, for inspecting the ledger directly.
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with an empty ledger.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            ..ServiceConfig::default()
        })
    }

    /// Create a harness whose router is built from `config`.
    pub fn with_config(config: ServiceConfig) -> Self {
        let state = AppState::in_memory(config);
        let router: Router = create_router(state.clone());

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }

    /// Charge `amount` points to `user_id`, asserting success.
    pub async fn fund(&self, user_id: u64, amount: i64) {
        self.server
            .patch(&format!("/v1/points/{user_id}/charge"))
            .json(&serde_json::json!({ "amount": amount }))
            .await
            .assert_status_ok();
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
