use std::cmp::Ordering;

use cookbook_shared::{RecipeDetail, RecipeIn, RecipeSummary};

/// Server-assigned recipe identifier. Starts at 1 and is never reused.
pub type RecipeId = i64;

/// Recipe entity - a named dish with its popularity counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub views_count: i64,
    /// Cooking time in minutes.
    pub cooking_time: i32,
    pub ingredients: String,
    pub description: String,
}

impl Recipe {
    /// Materialize a freshly created recipe with a zero view counter.
    pub fn from_new(id: RecipeId, recipe: NewRecipe) -> Self {
        Self {
            id,
            name: recipe.name,
            views_count: 0,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
            description: recipe.description,
        }
    }

    /// Listing order: most viewed first, then quickest to cook, then oldest.
    pub fn popularity_cmp(&self, other: &Self) -> Ordering {
        other
            .views_count
            .cmp(&self.views_count)
            .then_with(|| self.cooking_time.cmp(&other.cooking_time))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Client-supplied fields of a recipe, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub cooking_time: i32,
    pub ingredients: String,
    pub description: String,
}

impl From<RecipeIn> for NewRecipe {
    fn from(input: RecipeIn) -> Self {
        Self {
            name: input.name,
            cooking_time: input.cooking_time,
            ingredients: input.ingredients,
            description: input.description,
        }
    }
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            views_count: recipe.views_count,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
            description: recipe.description,
        }
    }
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            views_count: recipe.views_count,
            cooking_time: recipe.cooking_time,
        }
    }
}
