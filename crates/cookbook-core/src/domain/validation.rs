//! Explicit field validation for client input.

use std::fmt;

use super::{NewRecipe, RecipeId};

/// Maximum recipe name length, in characters.
pub const NAME_MAX_CHARS: usize = 200;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every constraint violation found in one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Human-readable `field: message` lines.
    pub fn messages(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl NewRecipe {
    /// Check every field constraint, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name_len = self.name.chars().count();
        if name_len == 0 {
            errors.push("name", "must not be empty");
        } else if name_len > NAME_MAX_CHARS {
            errors.push(
                "name",
                format!("must be at most {NAME_MAX_CHARS} characters, got {name_len}"),
            );
        }

        if self.cooking_time <= 0 {
            errors.push("cooking_time", "must be greater than 0");
        }
        if self.ingredients.is_empty() {
            errors.push("ingredients", "must not be empty");
        }
        if self.description.is_empty() {
            errors.push("description", "must not be empty");
        }

        errors.into_result()
    }
}

/// Accept only ids a stored recipe could have.
pub fn validate_recipe_id(id: i64) -> Result<RecipeId, ValidationErrors> {
    if id >= 1 {
        return Ok(id);
    }

    let mut errors = ValidationErrors::new();
    errors.push("id", "must be greater than or equal to 1");
    Err(errors)
}
