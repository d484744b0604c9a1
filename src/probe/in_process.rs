use axum::{
    Router,
    body::{self, Body},
    http::{Request, Uri},
};
use tower::ServiceExt;

use crate::error::{ProbeError, ProbeResult};
use crate::probe::{HEALTH_PATH, evaluate};

/// Limit on how much of the health body is buffered.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Drive a synthetic `GET /health` through `app` without opening a socket.
///
/// The router is consumed, the same way a single `oneshot` call consumes a
/// service. Clone it first if it is needed afterwards.
///
/// # Errors
///
/// Returns the errors of [`evaluate`], or `ProbeError::MalformedBody` if the
/// body cannot be read.
pub async fn check_router(app: Router) -> ProbeResult<()> {
    let mut request = Request::new(Body::empty());
    *request.uri_mut() = Uri::from_static(HEALTH_PATH);

    let response = app
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ProbeError::MalformedBody(format!("Failed to read body: {e}")))?;

    evaluate(status, &bytes)
}
