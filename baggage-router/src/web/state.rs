//! Application state for the web layer.

use std::sync::Arc;

use chrono::Local;

use crate::config::RouterConfig;

/// Shared application state.
///
/// Every request builds its own model, so only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    /// Reserved tokens used when parsing request bodies
    pub config: Arc<RouterConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration for a request arriving now, dated today.
    pub fn request_config(&self) -> RouterConfig {
        self.config
            .as_ref()
            .clone()
            .with_service_date(Local::now().date_naive())
    }
}
