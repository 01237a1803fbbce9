//! HTTP request handlers.

pub mod student_handler;
pub mod user_handler;

pub use student_handler::student_routes;
pub use user_handler::user_routes;
