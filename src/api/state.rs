//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::{Database, UserRepository};
use crate::services::{UserManager, UserService};

/// Application state containing the user service and, when running
/// against a real database, its connection for health checks.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection (absent for in-memory storage)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            database: None,
        }
    }

    /// Wire a `UserManager` over the given repository.
    pub fn from_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(user_repo)))
    }

    /// Attach the database used by the health endpoint.
    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
