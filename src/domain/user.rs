//! User domain entity and request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity as stored in the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identifier assigned by the database on insert
    #[schema(example = 1)]
    pub id: i64,
    /// Login name
    #[schema(example = "gloryh")]
    pub username: String,
    /// Stored in the clear in this teaching setup; never serialized out
    #[serde(skip_serializing, default)]
    pub password: String,
    /// User age
    #[schema(example = 24)]
    pub age: i32,
}

/// User request payload with the four field constraints.
///
/// The stores trust their caller; this payload is the only place the
/// constraints are checked, via the `ValidatedJson` extractor.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Target user id; ignored on create, required by validation
    #[validate(required(message = "id must not be null"))]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Login name, minimum length 2
    #[validate(length(min = 2, message = "username must be at least 2 characters"))]
    #[schema(example = "gloryh", min_length = 2)]
    pub username: String,
    /// User age, minimum 16
    #[validate(range(min = 16, message = "age must be at least 16"))]
    #[schema(example = 24, minimum = 16)]
    pub age: i32,
    /// Password, must not be empty
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "s3cret", min_length = 1)]
    pub password: String,
}

impl UserPayload {
    /// Convert to a domain user, substituting `fallback_id` when the
    /// payload carries none (the create path ignores payload ids).
    pub fn into_user(self, fallback_id: i64) -> User {
        User {
            id: self.id.unwrap_or(fallback_id),
            username: self.username,
            password: self.password,
            age: self.age,
        }
    }
}
