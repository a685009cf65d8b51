//! Feed health counters and the Prometheus exporter used by `serve`.

use std::net::SocketAddr;
use tracing::{info, warn};

pub const METRICS_PORT_ENV: &str = "FIXTURE_BOARD_METRICS_PORT";
const DEFAULT_METRICS_PORT: u16 = 9898;

const FEED_REQUESTS_SUCCESS: &str = "fixture_board_feed_requests_success_total";
const FEED_REQUESTS_ERROR: &str = "fixture_board_feed_requests_error_total";
const FEED_EVENTS: &str = "fixture_board_feed_events_total";
const FEED_EVENTS_SKIPPED: &str = "fixture_board_feed_events_skipped_total";

pub fn init_metrics() {
    let port: u16 = std::env::var(METRICS_PORT_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_METRICS_PORT);
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => info!("Prometheus exporter listening on http://{}/metrics", addr),
        Err(e) => warn!("Prometheus exporter install failed (possibly already installed): {}", e),
    }
}

/// Metrics for per-feed fetch outcomes
pub struct FeedMetrics;

impl FeedMetrics {
    pub fn record_success(feed: &str, events: usize) {
        ::metrics::counter!(FEED_REQUESTS_SUCCESS, "feed" => feed.to_string()).increment(1);
        ::metrics::counter!(FEED_EVENTS, "feed" => feed.to_string()).increment(events as u64);
    }

    pub fn record_error(feed: &str) {
        ::metrics::counter!(FEED_REQUESTS_ERROR, "feed" => feed.to_string()).increment(1);
    }

    pub fn record_skipped_event(feed: &str) {
        ::metrics::counter!(FEED_EVENTS_SKIPPED, "feed" => feed.to_string()).increment(1);
    }
}
