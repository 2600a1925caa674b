//! Domain entities - the core business objects.

mod recipe;
mod validation;

pub use recipe::{NewRecipe, Recipe, RecipeId};
pub use validation::{FieldError, NAME_MAX_CHARS, ValidationErrors, validate_recipe_id};
