//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::storage::{MemStorage, Storage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the storage backend and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    storage: Arc<dyn Storage>,
}

impl AppState {
    /// Create a new application state with the given storage backend.
    #[must_use]
    pub fn new(config: SiteConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, storage }),
        }
    }

    /// Create a state backed by a fresh in-memory store.
    ///
    /// This is the reference setup used by the binary and the tests.
    #[must_use]
    pub fn in_memory(config: SiteConfig) -> Self {
        Self::new(config, Arc::new(MemStorage::new()))
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.inner.storage.as_ref()
    }
}
