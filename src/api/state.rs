//! Application state for the bill splitter API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::EventStore;

/// Shared application state.
///
/// Contains the loaded configuration and the event store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded splitter configuration.
    config: Arc<ConfigLoader>,
    /// Where events, people and items live.
    store: Arc<dyn EventStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn EventStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the event store.
    pub fn store(&self) -> &dyn EventStore {
        self.store.as_ref()
    }
}
