//! In-memory student repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::Student;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository trait for dependency injection.
///
/// Exactly the four operations of the student capability set.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List all students; iteration order is not guaranteed
    async fn find_all(&self) -> AppResult<Vec<Student>>;

    /// Find a student by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>>;

    /// Remove a student by id; absent ids are a silent no-op
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Insert or fully replace the record with the same id
    async fn save_or_update(&self, student: Student) -> AppResult<()>;
}

/// Map-backed student store standing in for a real persistence layer.
///
/// The map is owned by the store instance and injected where needed,
/// never ambient. Concurrent writers racing on one id resolve to
/// last-write-wins under the lock; there is no atomicity across calls.
pub struct InMemoryStudentStore {
    students: RwLock<HashMap<i64, Student>>,
}

impl InMemoryStudentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store seeded with the sample roster
    pub fn with_seed_data() -> Self {
        let mut students = HashMap::new();
        students.insert(1, Student::new(1, "张三", 20));
        students.insert(2, Student::new(2, "李四", 21));
        students.insert(3, Student::new(3, "王五", 22));
        Self {
            students: RwLock::new(students),
        }
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned lock means a writer panicked mid-update; surface it as an
// internal error rather than propagating the panic.
fn lock_poisoned<T>(_: T) -> AppError {
    AppError::internal("student store lock poisoned")
}

#[async_trait]
impl StudentRepository for InMemoryStudentStore {
    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let students = self.students.read().map_err(lock_poisoned)?;
        Ok(students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        let students = self.students.read().map_err(lock_poisoned)?;
        Ok(students.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut students = self.students.write().map_err(lock_poisoned)?;
        students.remove(&id);
        Ok(())
    }

    async fn save_or_update(&self, student: Student) -> AppResult<()> {
        let mut students = self.students.write().map_err(lock_poisoned)?;
        students.insert(student.id, student);
        Ok(())
    }
}
