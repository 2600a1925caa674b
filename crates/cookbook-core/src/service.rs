//! Recipe service - the request/response contract on top of a [`RecipeStore`].

use std::sync::Arc;

use cookbook_shared::{RecipeDetail, RecipeIn, RecipeSummary};

use crate::domain::{NewRecipe, validate_recipe_id};
use crate::error::DomainError;
use crate::ports::RecipeStore;

/// Validates client input, calls the store and shapes the payloads.
///
/// Every successful detail fetch counts as a view.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new recipe.
    pub async fn create_recipe(&self, input: RecipeIn) -> Result<RecipeDetail, DomainError> {
        let recipe = NewRecipe::from(input);
        if let Err(errors) = recipe.validate() {
            tracing::info!(fields = ?errors.fields(), "Rejected recipe input");
            return Err(DomainError::InvalidInput(errors));
        }

        let created = self.store.create(recipe).await?;
        tracing::info!(recipe_id = created.id, "Recipe created");

        Ok(created.into())
    }

    /// All recipes in popularity order, without ingredients or description.
    pub async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, DomainError> {
        let recipes = self.store.list_all().await?;
        tracing::debug!(count = recipes.len(), "Listed recipes");

        Ok(recipes.into_iter().map(Into::into).collect())
    }

    /// Fetch one recipe, counting the fetch as a view.
    pub async fn get_recipe_detail(&self, id: i64) -> Result<RecipeDetail, DomainError> {
        let id = validate_recipe_id(id).map_err(DomainError::InvalidInput)?;

        match self.store.increment_views_and_fetch(id).await? {
            Some(recipe) => Ok(recipe.into()),
            None => {
                tracing::debug!(recipe_id = id, "Recipe not found");
                Err(DomainError::RecipeNotFound { id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Recipe, RecipeId};
    use crate::error::RepoError;

    /// Store that counts calls and fails every query.
    #[derive(Default)]
    struct BrokenStore {
        calls: AtomicUsize,
    }

    impl BrokenStore {
        fn fail(&self) -> RepoError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RepoError::Connection("connection refused".to_string())
        }
    }

    #[async_trait]
    impl RecipeStore for BrokenStore {
        async fn create(&self, _recipe: NewRecipe) -> Result<Recipe, RepoError> {
            Err(self.fail())
        }

        async fn list_all(&self) -> Result<Vec<Recipe>, RepoError> {
            Err(self.fail())
        }

        async fn get_by_id(&self, _id: RecipeId) -> Result<Option<Recipe>, RepoError> {
            Err(self.fail())
        }

        async fn increment_views_and_fetch(
            &self,
            _id: RecipeId,
        ) -> Result<Option<Recipe>, RepoError> {
            Err(self.fail())
        }
    }

    fn input(name: &str, cooking_time: i32) -> RecipeIn {
        RecipeIn {
            name: name.to_string(),
            cooking_time,
            ingredients: "water".to_string(),
            description: "boil".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_store() {
        let store = Arc::new(BrokenStore::default());
        let service = RecipeService::new(store.clone());

        let err = service.create_recipe(input("", 0)).await.unwrap_err();

        match err {
            DomainError::InvalidInput(errors) => {
                assert_eq!(errors.fields(), vec!["name", "cooking_time"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_positive_id_never_reaches_store() {
        let store = Arc::new(BrokenStore::default());
        let service = RecipeService::new(store.clone());

        let err = service.get_recipe_detail(0).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let service = RecipeService::new(Arc::new(BrokenStore::default()));

        assert!(matches!(
            service.list_recipes().await,
            Err(DomainError::Internal(_))
        ));
        assert!(matches!(
            service.get_recipe_detail(1).await,
            Err(DomainError::Internal(_))
        ));
        assert!(matches!(
            service.create_recipe(input("Tea", 3)).await,
            Err(DomainError::Internal(_))
        ));
    }
}
