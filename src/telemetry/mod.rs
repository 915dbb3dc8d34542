//! Telemetry module
//!
//! Structured logging and run metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{increment, record_failure, record_latency, CounterMetric, LatencyMetric};

use crate::config::TelemetryConfig;

/// Guard that keeps telemetry alive for the life of the process
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
///
/// Only logging is set up here. No metrics recorder is installed; see the
/// `metrics` module for embedding.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    Ok(TelemetryGuard { _priv: () })
}
