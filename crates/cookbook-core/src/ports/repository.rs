use async_trait::async_trait;

use crate::domain::{NewRecipe, Recipe, RecipeId};
use crate::error::RepoError;

/// Durable collection of recipes.
///
/// Records are only ever created or have their view counter bumped;
/// there is no update or delete.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe, assigning a fresh id and a zero view counter.
    ///
    /// Structurally invalid records are rejected with [`RepoError::Invalid`].
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepoError>;

    /// Every recipe, most viewed first, then quickest, then oldest.
    async fn list_all(&self) -> Result<Vec<Recipe>, RepoError>;

    /// Point lookup by id.
    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError>;

    /// Atomically add one view and return the updated record.
    ///
    /// Returns `None` without mutating anything when the id is unknown.
    async fn increment_views_and_fetch(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError>;
}
