//! HTTP handlers and route configuration.

pub mod recipes;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::error::{json_error_handler, path_error_handler};
use crate::openapi::ApiDoc;

/// Configure all application routes, plus the Swagger UI at `/docs/` and the
/// OpenAPI document at `/openapi.json`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/recipes")
                .route("", web::post().to(recipes::create_recipe))
                .route("", web::get().to(recipes::list_recipes))
                .route("/{id}", web::get().to(recipes::get_recipe)),
        )
        .service(
            SwaggerUi::new(ApiDoc::swagger_ui_path())
                .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        );
}
