//! Recipe entity for SeaORM.

use sea_orm::entity::prelude::*;

use cookbook_core::domain::Recipe;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(default_value = 0)]
    pub views_count: i64,
    pub cooking_time: i32,
    #[sea_orm(column_type = "Text")]
    pub ingredients: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Recipe.
impl From<Model> for Recipe {
    fn from(model: Model) -> Self {
        Self {
            id: i64::from(model.id),
            name: model.name,
            views_count: model.views_count,
            cooking_time: model.cooking_time,
            ingredients: model.ingredients,
            description: model.description,
        }
    }
}
