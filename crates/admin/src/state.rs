//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AdminConfig;
use crate::db::UserRepository;

/// Application state shared across all handlers.
///
/// Cheap to clone. The user repository sits behind a single `RwLock`, so
/// mutations are serialized and reads never observe a half-applied change.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    users: RwLock<UserRepository>,
}

impl AppState {
    /// Create application state around a seeded repository.
    #[must_use]
    pub fn new(config: AdminConfig, users: UserRepository) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: RwLock::new(users),
            }),
        }
    }

    /// Returns the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Returns the locked user repository.
    #[must_use]
    pub fn users(&self) -> &RwLock<UserRepository> {
        &self.inner.users
    }
}
