use axum::Json;

use crate::probe::HealthResponse;

/// Health check endpoint
///
/// Returns 200 OK with `{"status": "up"}` while the service is running.
/// Suitable for Kubernetes probes and the `health_check` binary.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}
