//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_chat_requests_total` (counter): chat requests by outcome
//! - `gateway_chat_request_duration_seconds` (histogram): latency by outcome
//! - `gateway_rate_limited_total` (counter): requests rejected by the limiter

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and serve scrapes on `addr`.
///
/// Exposition runs on its own listener so the chat surface never serves
/// metrics.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed chat request.
pub fn record_chat_request(outcome: &'static str, start: Instant) {
    counter!("gateway_chat_requests_total", "outcome" => outcome).increment(1);
    histogram!("gateway_chat_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record one request rejected by the rate limiter.
pub fn record_rate_limited() {
    counter!("gateway_rate_limited_total").increment(1);
}
