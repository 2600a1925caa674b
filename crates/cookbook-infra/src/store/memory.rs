//! In-memory recipe store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use cookbook_core::domain::{NewRecipe, Recipe, RecipeId};
use cookbook_core::error::RepoError;
use cookbook_core::ports::RecipeStore;

struct StoredRecipe {
    /// Immutable fields. `views_count` here is stale; `views` is authoritative.
    recipe: Recipe,
    views: AtomicI64,
}

impl StoredRecipe {
    fn with_views(&self, views_count: i64) -> Recipe {
        Recipe {
            views_count,
            ..self.recipe.clone()
        }
    }

    fn snapshot(&self) -> Recipe {
        self.with_views(self.views.load(Ordering::SeqCst))
    }
}

/// In-memory recipe store using a BTreeMap behind an async RwLock.
///
/// View increments only take the read lock and bump a per-record atomic,
/// so increments on different recipes never wait on each other.
/// Note: Data is lost on process restart.
pub struct InMemoryRecipeStore {
    records: RwLock<BTreeMap<RecipeId, StoredRecipe>>,
    next_id: AtomicI64,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored recipes.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepoError> {
        recipe.validate().map_err(RepoError::Invalid)?;

        let mut records = self.records.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let recipe = Recipe::from_new(id, recipe);

        records.insert(
            id,
            StoredRecipe {
                recipe: recipe.clone(),
                views: AtomicI64::new(0),
            },
        );
        tracing::debug!(recipe_id = id, "Stored recipe in memory");

        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RepoError> {
        let records = self.records.read().await;
        let mut recipes: Vec<Recipe> = records.values().map(StoredRecipe::snapshot).collect();
        drop(records);

        recipes.sort_by(Recipe::popularity_cmp);
        Ok(recipes)
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError> {
        let records = self.records.read().await;
        Ok(records.get(&id).map(StoredRecipe::snapshot))
    }

    async fn increment_views_and_fetch(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError> {
        let records = self.records.read().await;
        let Some(stored) = records.get(&id) else {
            return Ok(None);
        };

        let views_count = stored.views.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(recipe_id = id, views_count, "Recipe viewed");

        Ok(Some(stored.with_views(views_count)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_recipe(name: &str, cooking_time: i32) -> NewRecipe {
        NewRecipe {
            name: name.to_string(),
            cooking_time,
            ingredients: "salt".to_string(),
            description: "mix".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = InMemoryRecipeStore::new();

        let first = store.create(new_recipe("Soup", 30)).await.unwrap();
        let second = store.create(new_recipe("Salad", 10)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.views_count, 0);
    }

    #[tokio::test]
    async fn test_rejects_invalid_record() {
        let store = InMemoryRecipeStore::new();

        let result = store.create(new_recipe("", 30)).await;

        assert!(matches!(result, Err(RepoError::Invalid(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_increment_unknown_id() {
        let store = InMemoryRecipeStore::new();
        assert!(store.increment_views_and_fetch(42).await.unwrap().is_none());
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_returns_post_increment_record() {
        let store = InMemoryRecipeStore::new();
        let created = store.create(new_recipe("Stew", 120)).await.unwrap();

        let viewed = store.increment_views_and_fetch(created.id).await.unwrap().unwrap();
        assert_eq!(viewed.views_count, 1);

        let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, viewed);
    }

    #[tokio::test]
    async fn test_list_orders_by_views_then_cooking_time() {
        let store = InMemoryRecipeStore::new();
        let a = store.create(new_recipe("A", 10)).await.unwrap();
        let b = store.create(new_recipe("B", 5)).await.unwrap();
        let c = store.create(new_recipe("C", 1)).await.unwrap();

        for _ in 0..5 {
            store.increment_views_and_fetch(a.id).await.unwrap();
            store.increment_views_and_fetch(b.id).await.unwrap();
        }
        for _ in 0..10 {
            store.increment_views_and_fetch(c.id).await.unwrap();
        }

        let names: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(InMemoryRecipeStore::new());
        let id = store.create(new_recipe("Bread", 240)).await.unwrap().id;

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .increment_views_and_fetch(id)
                        .await
                        .unwrap()
                        .unwrap()
                        .views_count
                })
            })
            .collect();

        let mut seen = Vec::new();
        for handle in handles {
            seen.push(handle.await.unwrap());
        }
        seen.sort_unstable();

        assert_eq!(seen, (1..=100).collect::<Vec<i64>>());
        let stored = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.views_count, 100);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(InMemoryRecipeStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(new_recipe(&format!("Dish {i}"), 15))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    }
}
