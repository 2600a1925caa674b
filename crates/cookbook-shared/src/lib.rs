//! # Cookbook Shared
//!
//! Wire types shared between the HTTP layer and its clients.

pub mod dto;
pub mod response;

pub use dto::{RecipeDetail, RecipeIn, RecipeSummary};
pub use response::ErrorResponse;
