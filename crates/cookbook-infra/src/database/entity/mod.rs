//! SeaORM entities.

pub mod recipe;
