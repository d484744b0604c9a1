use reqwest::Client;
use std::time::Duration;

use crate::error::{ProbeError, ProbeResult};
use crate::probe::evaluate;

/// Network health probe: one GET, one verdict.
pub struct HealthProbe {
    http_client: Client,
}

impl HealthProbe {
    /// Build a probe whose requests give up after `timeout`.
    ///
    /// The timeout covers the whole exchange, connect through body. Proxy
    /// environment variables are ignored; the probe talks to the target directly.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Client` if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> ProbeResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self { http_client })
    }

    /// Fetch `url` once and apply the health rule to the response.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Request` on connection failure or timeout, and the
    /// errors of [`evaluate`] for an unhealthy response.
    pub async fn check(&self, url: &str) -> ProbeResult<()> {
        tracing::debug!(url, "Probing health endpoint");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = %status, bytes = body.len(), "Health response received");

        evaluate(status, &body)
    }
}
