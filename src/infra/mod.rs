//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection and migrations
//! - Repositories (SeaORM-backed and in-memory)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{InMemoryUserRepository, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
