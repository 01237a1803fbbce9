//! Application state - Injected store instances.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{
    Database, InMemoryStudentStore, SqlUserStore, StudentRepository, UserRepository,
};

/// Application state shared across handlers.
///
/// Both stores are constructor-provided, never ambient, so tests can
/// swap in mocks without touching global state.
#[derive(Clone)]
pub struct AppState {
    /// Student store (in-memory)
    pub students: Arc<dyn StudentRepository>,
    /// User store (SQL-backed)
    pub users: Arc<dyn UserRepository>,
    /// Database handle, kept for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state with the default store implementations.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let students: Arc<dyn StudentRepository> = if config.seed_students {
            Arc::new(InMemoryStudentStore::with_seed_data())
        } else {
            Arc::new(InMemoryStudentStore::new())
        };

        Self {
            students,
            users: Arc::new(SqlUserStore::new(database.get_connection())),
            database,
        }
    }

    /// Build state from explicitly injected stores.
    pub fn new(
        students: Arc<dyn StudentRepository>,
        users: Arc<dyn UserRepository>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            students,
            users,
            database,
        }
    }
}
