//! Domain layer - Core entities
//!
//! Plain records for the two entity types plus the validated user
//! request payload.

mod student;
mod user;

pub use student::Student;
pub use user::{User, UserPayload};
