//! Recipe store implementations - SQL and in-memory fallback.

mod memory;

#[cfg(feature = "database")]
mod sql;

pub use memory::InMemoryRecipeStore;

#[cfg(feature = "database")]
pub use sql::SqlRecipeStore;
