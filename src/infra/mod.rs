//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories for the two entity stores

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{InMemoryStudentStore, SqlUserStore, StudentRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockStudentRepository, MockUserRepository};
