use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::probe::models::HealthStatus;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Reasons a health check did not come back healthy.
///
/// Callers that only care about the verdict collapse every variant into
/// [`Verdict::Unhealthy`](crate::probe::Verdict::Unhealthy).
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Malformed health body: {0}")]
    MalformedBody(String),

    #[error("Service reported status {0}")]
    NotUp(HealthStatus),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
