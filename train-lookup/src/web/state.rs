//! Application state for the web layer.

use std::sync::Arc;

use crate::upstream::TrainApiClient;

/// Shared application state.
///
/// Read-only after start-up; requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Upstream train API client
    pub api: Arc<TrainApiClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(api: TrainApiClient) -> Self {
        Self { api: Arc::new(api) }
    }
}
