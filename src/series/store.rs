//! Time-ascending price series

use super::types::{PricePoint, SeriesError};
use chrono::{DateTime, Utc};

/// Time-ascending sequence of [`PricePoint`]s, indexed by position
///
/// Timestamps are non-decreasing and the series holds at least one point.
/// Duplicates are kept as delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Build a series from raw `(timestamp, close)` observations
    pub fn from_observations(
        observations: impl IntoIterator<Item = (DateTime<Utc>, f64)>,
    ) -> Result<Self, SeriesError> {
        let mut points: Vec<PricePoint> = Vec::new();

        for (index, (timestamp, close)) in observations.into_iter().enumerate() {
            if !close.is_finite() {
                return Err(SeriesError::NonFiniteClose { index });
            }

            let previous = points.last().map(|p| (p.timestamp, p.close));
            if let Some((prev_ts, _)) = previous {
                if timestamp < prev_ts {
                    return Err(SeriesError::OutOfOrder { index });
                }
            }

            points.push(PricePoint::derive(
                timestamp,
                close,
                previous.map(|(_, prev_close)| prev_close),
            ));
        }

        if points.is_empty() {
            return Err(SeriesError::Empty);
        }

        Ok(Self { points })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed series; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at a position
    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    /// Most recent point
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// All points, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Timestamps, oldest first
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }
}
