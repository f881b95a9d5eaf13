//! Metrics collection and exposition.
//!
//! # Metrics
//! - `storefront_upstream_requests_total` (counter): upstream calls by outcome
//!   (`success`, `status`, `transport`, `missing_credential`, `malformed`)
//! - `storefront_upstream_request_duration_seconds` (histogram): latency of
//!   calls that reached the wire
//!
//! Every upstream call is counted exactly once.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a finished upstream call.
pub fn record_upstream_call(outcome: &'static str, start: Instant) {
    metrics::counter!("storefront_upstream_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("storefront_upstream_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record an outcome that has no wire latency attached.
pub fn record_upstream_outcome(outcome: &'static str) {
    metrics::counter!("storefront_upstream_requests_total", "outcome" => outcome).increment(1);
}
