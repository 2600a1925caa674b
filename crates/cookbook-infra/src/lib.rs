//! # Cookbook Infrastructure
//!
//! Concrete implementations of the [`RecipeStore`](cookbook_core::ports::RecipeStore) port.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `database` - SQLite / PostgreSQL storage via SeaORM

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::InMemoryRecipeStore;

#[cfg(feature = "database")]
pub use database::DatabaseConnections;
#[cfg(feature = "database")]
pub use store::SqlRecipeStore;
