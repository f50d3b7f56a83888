//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, status, outcome
//! - `router_request_duration_seconds` (histogram): latency distribution
//! - `router_locale_redirects_total` (counter): canonical locale redirects
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Outcome label distinguishes redirect / proxied / upstream_error

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    if let Err(e) = builder.install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
    } else {
        tracing::info!(address = %addr, "Metrics endpoint listening");
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, outcome: &str, start: Instant) {
    counter!(
        "router_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);

    histogram!(
        "router_request_duration_seconds",
        "method" => method.to_string(),
        "outcome" => outcome.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one canonical locale redirect.
pub fn record_locale_redirect() {
    counter!("router_locale_redirects_total").increment(1);
}
