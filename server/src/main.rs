mod api;
mod db;
mod models;
mod schema;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use mise_core::{create_provider_from_env, LlmProvider};
use std::env;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers.
///
/// The LLM provider and the database pool are built once at startup and
/// injected here; handlers never reach for globals.
pub struct AppState {
    pub pool: db::DbPool,
    pub llm: Arc<dyn LlmProvider>,
}

pub type SharedState = Arc<AppState>;

fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let llm = create_provider_from_env().expect("Failed to configure LLM provider");

    tracing::info!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        "LLM provider configured"
    );

    let state: SharedState = Arc::new(AppState {
        pool: db::create_pool(&database_url),
        llm: Arc::from(llm),
    });

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    // The original deployment sat behind a browser frontend on another
    // origin, so CORS stays wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/test", api::testing::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let bind_addr = env::var("MISE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_addr);

    axum::serve(listener, app).await.unwrap();
}
