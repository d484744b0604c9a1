//! Health checks against the `/health` endpoint.
//!
//! Both checks apply the same rule: the service is healthy only when the
//! response status is exactly `200 OK` and the JSON body carries
//! `"status": "up"`.
//!
//! - [`in_process`] drives an application [`Router`](axum::Router) directly,
//!   without a socket.
//! - [`client`] issues a real HTTP request with a fixed timeout.

pub mod client;
pub mod in_process;
pub mod models;

pub use client::HealthProbe;
pub use in_process::check_router;
pub use models::{HealthResponse, HealthStatus};

use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::process::ExitCode;

use crate::error::{ProbeError, ProbeResult};

/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Apply the health rule to a raw response.
///
/// The body is only inspected once the status is `200 OK`.
///
/// # Errors
///
/// - `ProbeError::UnexpectedStatus` for any status other than 200
/// - `ProbeError::MalformedBody` if the body is not a JSON object with a string `status`
/// - `ProbeError::NotUp` if `status` is anything other than `"up"`
pub fn evaluate(status: StatusCode, body: &[u8]) -> ProbeResult<()> {
    if status != StatusCode::OK {
        return Err(ProbeError::UnexpectedStatus(status));
    }

    let body: Value =
        serde_json::from_slice(body).map_err(|e| ProbeError::MalformedBody(e.to_string()))?;
    let status = body
        .as_object()
        .and_then(|fields| fields.get("status"))
        .ok_or_else(|| ProbeError::MalformedBody("missing `status` field".to_string()))?;
    let status =
        HealthStatus::deserialize(status).map_err(|e| ProbeError::MalformedBody(e.to_string()))?;

    match status {
        HealthStatus::Up => Ok(()),
        other => Err(ProbeError::NotUp(other)),
    }
}

/// Outcome of a health check, as reported to the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Unhealthy,
}

impl Verdict {
    /// Collapse a check result. Every error kind is unhealthy.
    #[must_use]
    pub fn from_result(result: &ProbeResult<()>) -> Self {
        if result.is_ok() {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 2,
        }
    }

    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_with_200_is_healthy() {
        assert!(evaluate(StatusCode::OK, br#"{"status":"up"}"#).is_ok());
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert!(evaluate(StatusCode::OK, br#"{"status":"up","version":"1.2.3"}"#).is_ok());
    }

    #[test]
    fn down_with_200_is_unhealthy() {
        let err = evaluate(StatusCode::OK, br#"{"status":"down"}"#).unwrap_err();
        assert!(matches!(err, ProbeError::NotUp(HealthStatus::Down)));
    }

    #[test]
    fn non_200_is_unhealthy_even_when_up() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::NO_CONTENT,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            let err = evaluate(status, br#"{"status":"up"}"#).unwrap_err();
            assert!(matches!(err, ProbeError::UnexpectedStatus(s) if s == status));
        }
    }

    #[test]
    fn malformed_bodies_are_unhealthy() {
        for body in [
            &b"OK"[..],
            b"",
            b"[]",
            br#"["up"]"#,
            b"{}",
            br#"{"status":null}"#,
            br#"{"status":1}"#,
        ] {
            let err = evaluate(StatusCode::OK, body).unwrap_err();
            assert!(
                matches!(err, ProbeError::MalformedBody(_)),
                "body {:?} gave {err:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn verdict_codes() {
        assert_eq!(Verdict::from_result(&Ok(())).code(), 0);
        let failed = Err(ProbeError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(Verdict::from_result(&failed), Verdict::Unhealthy);
        assert_eq!(Verdict::Unhealthy.code(), 2);
    }
}
