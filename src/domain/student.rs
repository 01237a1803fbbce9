//! Student domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student entity, keyed by a caller-chosen numeric id.
///
/// Students carry no field constraints; the payload is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    /// Unique student identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Student display name
    #[schema(example = "张三")]
    pub name: String,
    /// Student age
    #[schema(example = 20)]
    pub age: i32,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}
