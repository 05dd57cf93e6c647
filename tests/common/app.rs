use std::sync::Arc;

use axum_test::TestServer;
use taskboard::build_router;
use taskboard::repositories::InMemoryStore;
use taskboard::services::FixedClock;
use taskboard::state::AppState;
use time::macros::date;
use time::Date;

/// Date every test app treats as "today"
pub const TODAY: Date = date!(2026 - 10 - 16);

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub store: InMemoryStore,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        // In-memory store and a pinned clock keep tests off the database and wall clock
        let store = InMemoryStore::new();
        let state = AppState::with_repositories(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(FixedClock(TODAY)),
        );

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            state,
            store,
        }
    }
}
