//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, RosterRepository, RosterStore};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only roster queries
    pub roster: Arc<dyn RosterRepository>,
}

impl AppState {
    /// Create application state backed by the given database.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(RosterStore::new(database.get_connection())))
    }

    /// Create application state with a manually injected repository.
    pub fn new(roster: Arc<dyn RosterRepository>) -> Self {
        Self { roster }
    }
}
