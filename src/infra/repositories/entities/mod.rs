//! SeaORM entity definitions
//!
//! Database-specific row types kept separate from the domain models.

pub mod user;
