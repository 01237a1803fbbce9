//! Repository layer - Data access abstraction
//!
//! One store per entity type: students in a process-local map, users
//! behind parameterized SQL. Each store exposes exactly its capability
//! set through a trait so callers can inject mocks.

pub(crate) mod entities;
mod student_repository;
mod user_repository;

pub use student_repository::{InMemoryStudentStore, StudentRepository};
pub use user_repository::{SqlUserStore, UserRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
