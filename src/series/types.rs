//! Series types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single daily observation
///
/// Only `timestamp` and `close` come from the provider. The remaining
/// fields are derived from the previous close when the series is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation time
    pub timestamp: DateTime<Utc>,
    /// Closing price
    pub close: f64,
    /// Previous close (own close for the first point)
    pub open: f64,
    /// Max of this and the previous close
    pub high: f64,
    /// Min of this and the previous close
    pub low: f64,
}

impl PricePoint {
    /// Build a point from its close and the close before it
    pub fn derive(timestamp: DateTime<Utc>, close: f64, previous_close: Option<f64>) -> Self {
        let open = previous_close.unwrap_or(close);
        Self {
            timestamp,
            close,
            open,
            high: open.max(close),
            low: open.min(close),
        }
    }
}

/// Rejections raised while building a series
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    /// Provider returned no observations
    #[error("series is empty")]
    Empty,
    /// Close is NaN or infinite
    #[error("non-finite close at index {index}")]
    NonFiniteClose { index: usize },
    /// Timestamp earlier than its predecessor
    #[error("timestamp at index {index} precedes the previous observation")]
    OutOfOrder { index: usize },
}
