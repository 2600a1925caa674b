//! Recipe handlers.

use actix_web::{HttpResponse, web};

use cookbook_shared::{ErrorResponse, RecipeDetail, RecipeIn, RecipeSummary};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Create a new recipe.
///
/// `POST /recipes` - returns the stored recipe with `views_count` 0.
#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipeIn,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDetail),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    state: web::Data<AppState>,
    body: web::Json<RecipeIn>,
) -> AppResult<HttpResponse> {
    let recipe = state.recipes.create_recipe(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(recipe))
}

/// List all recipes.
///
/// `GET /recipes` - most viewed first, then quickest to cook.
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes by popularity", body = Vec<RecipeSummary>)
    )
)]
pub async fn list_recipes(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let recipes = state.recipes.list_recipes().await?;
    Ok(HttpResponse::Ok().json(recipes))
}

/// Get a recipe's full detail.
///
/// `GET /recipes/{id}` - every successful call counts as a view.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id, a positive integer")),
    responses(
        (status = 200, description = "Recipe detail, view already counted", body = RecipeDetail),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Malformed or non-positive id", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let recipe = state.recipes.get_recipe_detail(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(recipe))
}
