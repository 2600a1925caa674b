//! # Cookbook Core
//!
//! The domain layer of the recipe catalog.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::RecipeService;
