//! Application state - shared across all handlers.

use std::sync::Arc;

use anon_core::error::UpstreamError;
use anon_core::ports::ArenaApi;
use anon_infra::{ArenaClient, ArenaConfig};

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub arena: Arc<dyn ArenaApi>,
}

impl AppState {
    /// Build the state with the real upstream client.
    pub fn new(config: &ArenaConfig) -> Result<Self, UpstreamError> {
        let client = ArenaClient::new(config.clone())?;

        tracing::info!(base_url = %config.base_url, "Application state initialized");

        Ok(Self::with_arena(Arc::new(client)))
    }

    pub fn with_arena(arena: Arc<dyn ArenaApi>) -> Self {
        Self { arena }
    }
}
