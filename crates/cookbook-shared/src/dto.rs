//! Data Transfer Objects - request/response types for the recipes API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /recipes`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeIn {
    /// Dish name.
    #[schema(min_length = 1, max_length = 200, example = "Borscht")]
    pub name: String,
    /// Cooking time in minutes.
    #[schema(minimum = 1, example = 120)]
    pub cooking_time: i32,
    /// Ingredient list, free text.
    #[schema(min_length = 1, example = "beets, cabbage, potatoes")]
    pub ingredients: String,
    /// How to cook it.
    #[schema(min_length = 1, example = "Simmer for two hours.")]
    pub description: String,
}

/// Lightweight listing payload (first screen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    /// Recipe id.
    pub id: i64,
    /// Dish name.
    pub name: String,
    /// Number of times the detail page was opened.
    pub views_count: i64,
    /// Cooking time in minutes.
    pub cooking_time: i32,
}

/// Full recipe payload (second screen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    /// Recipe id.
    pub id: i64,
    /// Dish name.
    pub name: String,
    /// Number of times the detail page was opened, this request included.
    pub views_count: i64,
    /// Cooking time in minutes.
    pub cooking_time: i32,
    /// Ingredient list, free text.
    pub ingredients: String,
    /// How to cook it.
    pub description: String,
}
