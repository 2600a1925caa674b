//! Database connection management.

mod connections;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::{DatabaseConfig, sqlite_create_if_missing};

#[cfg(feature = "database")]
pub use connections::DatabaseConnections;
