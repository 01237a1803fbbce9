//! SQL-backed user repository.
//!
//! Translates the five logical operations into single parameterized
//! statements against the `user` table. No transactions, no retries;
//! uniqueness of `id` is assumed from the schema, not enforced here.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Statement};

use super::entities::user::Entity as UserEntity;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find a user by id; NotFound when no row matches
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Insert a new user; the id is assigned by the database and any
    /// id on `user` is ignored (and not read back)
    async fn save(&self, user: User) -> AppResult<()>;

    /// Update username/password/age keyed by id; a missing id affects
    /// zero rows and is not an error
    async fn update(&self, user: User) -> AppResult<()>;

    /// Delete by id; a missing id affects zero rows and is not an error
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Repository issuing raw parameterized SQL over a SeaORM connection.
///
/// Caller-supplied values are bound positionally, never concatenated
/// into the statement text.
pub struct SqlUserStore {
    db: Arc<DatabaseConnection>,
}

impl SqlUserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn statement(&self, sql: &str, values: impl IntoIterator<Item = sea_orm::Value>) -> Statement {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }
}

#[async_trait]
impl UserRepository for SqlUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows = UserEntity::find()
            .from_raw_sql(Statement::from_string(
                self.db.get_database_backend(),
                r#"SELECT * FROM "user""#.to_string(),
            ))
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        let row = UserEntity::find()
            .from_raw_sql(self.statement(
                r#"SELECT * FROM "user" WHERE id = $1"#,
                [id.into()],
            ))
            .one(self.db.as_ref())
            .await?;

        row.map(User::from).ok_or(AppError::NotFound)
    }

    async fn save(&self, user: User) -> AppResult<()> {
        self.db
            .execute(self.statement(
                r#"INSERT INTO "user" (username, password, age) VALUES ($1, $2, $3)"#,
                [user.username.into(), user.password.into(), user.age.into()],
            ))
            .await?;

        Ok(())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        self.db
            .execute(self.statement(
                r#"UPDATE "user" SET username = $1, password = $2, age = $3 WHERE id = $4"#,
                [
                    user.username.into(),
                    user.password.into(),
                    user.age.into(),
                    user.id.into(),
                ],
            ))
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.db
            .execute(self.statement(
                r#"DELETE FROM "user" WHERE id = $1"#,
                [id.into()],
            ))
            .await?;

        Ok(())
    }
}
