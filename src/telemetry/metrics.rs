//! Run metrics
//!
//! Recorded through the `metrics` facade only. The `trend-alert` binary is
//! a one-shot process and installs no recorder, so these calls are no-ops
//! there. A host that embeds the library and registers its own recorder
//! receives every metric below.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// One fetch attempt against the market-data provider
    Fetch,
    /// Indicator computation and alert evaluation
    Compute,
    /// One notifier delivery
    Notify,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Fetch attempts, successful or not
    FetchAttempts,
    /// Alert events emitted
    AlertsEmitted,
    /// Messages the notifier accepted
    MessagesSent,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::Fetch => "trend_alert_fetch_latency_ms",
            LatencyMetric::Compute => "trend_alert_compute_latency_ms",
            LatencyMetric::Notify => "trend_alert_notify_latency_ms",
        }
    }
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::FetchAttempts => "trend_alert_fetch_attempts_total",
            CounterMetric::AlertsEmitted => "trend_alert_alerts_emitted_total",
            CounterMetric::MessagesSent => "trend_alert_messages_sent_total",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    ::metrics::histogram!(metric.name()).record(value_ms);
    tracing::debug!(metric = metric.name(), value_ms, "Recording latency");
}

/// Increment a counter
pub fn increment(metric: CounterMetric, by: u64) {
    ::metrics::counter!(metric.name()).increment(by);
}

/// Count a failed run, labelled by failure kind
pub fn record_failure(kind: &'static str) {
    ::metrics::counter!("trend_alert_run_failures_total", "kind" => kind).increment(1);
}
