use crate::fixtures;
use crate::store::Store;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
///
/// The store is the only shared mutable state in the process: reads take
/// the shared lock, the single write path (message creation) takes the
/// exclusive lock.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// State seeded with the demo fixture data.
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::sample_store())
    }
}
