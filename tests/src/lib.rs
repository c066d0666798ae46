//! Integration test harness for the `rentr` workspace.
//!
//! Provides the seeding factories and the scoped [`TestDatabase`] resource
//! the suites under `tests/` build on.

pub mod seeding;

use std::sync::Arc;

use rentr_core::adapters::outbound::memory::datastore::InMemoryDatastore;

/// A per-test datastore.
///
/// Every test acquires its own instance, so no state crosses test
/// boundaries; `Drop` resets the store on every exit path, panicking tests
/// included, mirroring a create-and-drop-per-test database discipline.
pub struct TestDatabase {
    store: Arc<InMemoryDatastore>,
}

impl TestDatabase {
    pub fn create() -> Self {
        Self {
            store: Arc::new(InMemoryDatastore::new()),
        }
    }

    pub fn store(&self) -> Arc<InMemoryDatastore> {
        Arc::clone(&self.store)
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let _ = self.store.reset();
    }
}
