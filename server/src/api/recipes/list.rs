use crate::api::ErrorResponse;
use crate::get_conn;
use crate::schema::recipes;
use crate::SharedState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Total number of items available
    pub total: i64,
    /// Number of items requested (limit)
    pub limit: i64,
    /// Number of items skipped (offset)
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    /// Title from the stored document, if the model provided one
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub pagination: PaginationMetadata,
}

#[derive(Queryable)]
struct RecipeRow {
    id: Uuid,
    body: serde_json::Value,
    created_at: DateTime<Utc>,
    /// Total count of all matching rows (from window function)
    total_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "List of stored recipes", body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(20).clamp(1, 1000);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut conn = get_conn!(state.pool);

    // COUNT(*) OVER() computes the total count across all matching rows
    let results: Vec<RecipeRow> = match recipes::table
        .order(recipes::created_at.desc())
        .select((
            recipes::id,
            recipes::body,
            recipes::created_at,
            sql::<BigInt>("COUNT(*) OVER()"),
        ))
        .limit(limit)
        .offset(offset)
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let total = results.first().map(|r| r.total_count).unwrap_or(0);

    let recipes = results
        .into_iter()
        .map(|r| RecipeSummary {
            id: r.id,
            title: r
                .body
                .get("title")
                .and_then(|t| t.as_str())
                .map(String::from),
            created_at: r.created_at,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ListRecipesResponse {
            recipes,
            pagination: PaginationMetadata {
                total,
                limit,
                offset,
            },
        }),
    )
        .into_response()
}
