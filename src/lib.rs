//! Roster API - A teaching-oriented CRUD service
//!
//! Two entities exposed over HTTP: students held in an injected
//! in-memory store, users behind parameterized SQL against a single
//! `user` table. There is deliberately no service tier, no caching and
//! no transaction scope; handlers map verbs straight onto the stores.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entity records and the validated user payload
//! - **infra**: Database connection, migrations, repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Student, User, UserPayload};
pub use errors::{AppError, AppResult};
