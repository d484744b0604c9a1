pub mod health;

use axum::{Router, http::Uri, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::error::AppError;
use crate::probe::{HEALTH_PATH, HealthResponse, HealthStatus};

#[derive(OpenApi)]
#[openapi(
    paths(health::health),
    components(schemas(HealthResponse, HealthStatus)),
    tags(
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Health Probe API",
        description = "Liveness endpoint for monitoring",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router() -> Router {
    let health_routes = Router::new().route(HEALTH_PATH, get(health::health));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
