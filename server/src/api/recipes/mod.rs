pub mod generate;
pub mod get;
pub mod list;

use crate::SharedState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/generate", post(generate::generate_recipe))
        .route("/{id}", get(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        generate::generate_recipe,
        list::list_recipes,
        get::get_recipe,
    ),
    components(schemas(
        generate::GenerateRecipeRequest,
        list::ListRecipesResponse,
        list::RecipeSummary,
        list::PaginationMetadata,
    ))
)]
pub struct ApiDoc;
