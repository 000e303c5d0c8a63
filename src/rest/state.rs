//! API state management for the REST server.

use std::sync::Arc;

use crate::config::Config;

/// Shared state for the REST API
///
/// The generation handler is stateless per call; the shared state is only
/// the configuration the provider client is built from.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
}

impl ApiState {
    /// Create new API state from config
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
