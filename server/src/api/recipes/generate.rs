use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::models::NewRecipe;
use crate::schema::recipes;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use mise_core::{generate_recipe as run_generation, Recipe, RecipeRequest};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Ingredients to build the recipe around. Must be non-empty.
    /// Defaults to empty so a missing field gets the same 400 as an
    /// empty list.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Whether to persist the generated recipe. Persistence is
    /// best-effort either way; the response is the same.
    #[serde(default = "default_save_to_db")]
    pub save_to_db: bool,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_save_to_db() -> bool {
    true
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe document"),
        (status = 400, description = "Missing ingredients", body = ErrorResponse),
        (status = 503, description = "Generation service unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<SharedState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    // Client-input validation happens before any inference call
    if request.ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredients list is required".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(ingredients = ?request.ingredients, "generating recipe");

    let core_request = RecipeRequest {
        ingredients: request.ingredients,
        dietary_restrictions: request.dietary_restrictions,
        cuisine_type: request.cuisine_type,
        meal_type: request.meal_type,
        difficulty: request.difficulty,
    };

    let recipe = match run_generation(state.llm.as_ref(), &core_request).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Recipe generation failed: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "Recipe generation is currently unavailable".to_string(),
                }),
            )
                .into_response();
        }
    };

    if request.save_to_db {
        save_recipe(&state.pool, &recipe);
    }

    (StatusCode::OK, Json(recipe)).into_response()
}

/// Persist a recipe, best-effort. Failures are logged and swallowed:
/// the caller gets the recipe whether or not the write succeeded.
fn save_recipe(pool: &DbPool, recipe: &Recipe) {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get DB connection for recipe save: {}", e);
            return;
        }
    };

    let body = match serde_json::to_value(recipe) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to serialize recipe {}: {}", recipe.id, e);
            return;
        }
    };

    let new_recipe = NewRecipe {
        id: recipe.id,
        body,
        source: &recipe.source,
        created_at: recipe.created_at,
    };

    match diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .execute(&mut conn)
    {
        Ok(_) => tracing::info!("Recipe saved with ID: {}", recipe.id),
        Err(e) => tracing::error!("Failed to save recipe {}: {}", recipe.id, e),
    }
}
