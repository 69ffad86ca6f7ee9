//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): total requests by method, status, page
//! - `site_request_duration_seconds` (histogram): render+serve latency
//!
//! # Design Decisions
//! - Low-overhead updates via the `metrics` facade (atomic operations)
//! - Prometheus exposition on a separate listener, gated by config
//! - The `page` label uses the stable page slug, "none" when unmatched

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, page: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("page", page.to_string()),
    ];
    counter!("site_requests_total", &labels).increment(1);
    histogram!("site_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}
