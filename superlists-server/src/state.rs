//! Application state shared across handlers

use std::sync::Arc;

use crate::db::ListStore;
use crate::http::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn ListStore>,
    config: ServerConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, config }),
        }
    }

    pub fn store(&self) -> &dyn ListStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
