//! Exit-code health probe for cron jobs and container `HEALTHCHECK`s.
//!
//! Sends one `GET http://localhost:8080/health` with a 3 second timeout.
//! Exits `0` when the service answers `200 {"status": "up"}`, `2` otherwise,
//! including on connection errors, timeouts and unparsable bodies.
//!
//! Silent by default. Set `RUST_LOG=debug` to see why a probe failed.

use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use health_probe::probe::{HealthProbe, Verdict};

const HEALTH_URL: &str = "http://localhost:8080/health";
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match HealthProbe::new(PROBE_TIMEOUT) {
        Ok(probe) => probe.check(HEALTH_URL).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::debug!(error = %e, url = HEALTH_URL, "Health probe failed");
    }

    Verdict::from_result(&result).exit_code()
}
