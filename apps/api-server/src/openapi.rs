//! OpenAPI document for the recipes API.

use utoipa::OpenApi;

use cookbook_shared::{ErrorResponse, RecipeDetail, RecipeIn, RecipeSummary};

use crate::handlers::recipes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API",
        version = "0.1.0",
        description = "Recipe catalog. Lists recipes by popularity and counts a view every time a recipe's detail page is opened.",
        license(name = "MIT")
    ),
    paths(recipes::create_recipe, recipes::list_recipes, recipes::get_recipe),
    components(schemas(RecipeIn, RecipeSummary, RecipeDetail, ErrorResponse)),
    tags((name = "recipes", description = "Create, list and view recipes"))
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }

    pub fn swagger_ui_path() -> &'static str {
        "/docs/{_:.*}"
    }
}
