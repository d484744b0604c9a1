use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Liveness state reported in the `status` field of `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
    /// Any string the service sends that is neither `up` nor `down`.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Body of `GET /health`. Fields other than `status` are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: HealthStatus::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn up_serializes_to_lowercase() {
        let value = serde_json::to_value(HealthResponse::up()).unwrap();
        assert_eq!(value, json!({ "status": "up" }));
    }

    #[test]
    fn unknown_status_strings_are_tolerated() {
        let parsed: HealthResponse =
            serde_json::from_value(json!({ "status": "degraded", "uptime": 12 })).unwrap();
        assert_eq!(parsed.status, HealthStatus::Unknown);
    }

    #[test]
    fn status_match_is_case_sensitive() {
        let parsed: HealthResponse = serde_json::from_value(json!({ "status": "UP" })).unwrap();
        assert_ne!(parsed.status, HealthStatus::Up);
    }
}
