use listsync_core::ListService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The one list service instance for the process lifetime
    pub service: Arc<ListService>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            service: Arc::new(ListService::with_seed_data()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
