//! SQL recipe store backed by SeaORM (SQLite or PostgreSQL).

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use cookbook_core::domain::{NewRecipe, Recipe, RecipeId};
use cookbook_core::error::RepoError;
use cookbook_core::ports::RecipeStore;

use crate::database::entity::recipe::{self, Entity as RecipeEntity};

/// Recipe store over a SeaORM connection pool.
pub struct SqlRecipeStore {
    db: DbConn,
}

impl SqlRecipeStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Close the pool, waiting for in-flight connections to be returned.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.db.close_by_ref().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Ids outside the column range cannot exist in the table.
fn column_id(id: RecipeId) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait]
impl RecipeStore for SqlRecipeStore {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepoError> {
        recipe.validate().map_err(RepoError::Invalid)?;

        let model = recipe::ActiveModel {
            id: NotSet,
            name: Set(recipe.name),
            views_count: Set(0),
            cooking_time: Set(recipe.cooking_time),
            ingredients: Set(recipe.ingredients),
            description: Set(recipe.description),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(recipe_id = model.id, "Inserted recipe");
        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RepoError> {
        let models = RecipeEntity::find()
            .order_by_desc(recipe::Column::ViewsCount)
            .order_by_asc(recipe::Column::CookingTime)
            .order_by_asc(recipe::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError> {
        let Some(key) = column_id(id) else {
            return Ok(None);
        };

        let model = RecipeEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Into::into))
    }

    async fn increment_views_and_fetch(&self, id: RecipeId) -> Result<Option<Recipe>, RepoError> {
        let Some(key) = column_id(id) else {
            return Ok(None);
        };

        // The UPDATE takes the row lock, so concurrent viewers of the same
        // recipe serialize here. Dropping `txn` on an early return rolls back.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let updated = RecipeEntity::update_many()
            .col_expr(
                recipe::Column::ViewsCount,
                Expr::col(recipe::Column::ViewsCount).add(1),
            )
            .filter(recipe::Column::Id.eq(key))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Ok(None);
        }

        let model = RecipeEntity::find_by_id(key)
            .one(&txn)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        if let Some(model) = &model {
            tracing::debug!(
                recipe_id = model.id,
                views_count = model.views_count,
                "Recipe viewed"
            );
        }

        Ok(model.map(Into::into))
    }
}
