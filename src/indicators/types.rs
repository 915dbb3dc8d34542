//! Indicator engine types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indicator value per input position
///
/// `None` marks a position that is not yet defined. It is a distinct state
/// and never stands in for NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeries {
    values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Series where every position is defined
    pub fn from_defined(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Series with explicit defined/undefined positions
    pub fn from_values(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Series of `len` undefined positions
    pub fn undefined(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position, `None` if undefined or out of range
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Index of the first defined value that is NaN or infinite
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values
            .iter()
            .position(|v| matches!(v, Some(x) if !x.is_finite()))
    }
}

/// Smoothing periods for the three indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorPeriods {
    pub rsi: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
}

impl Default for IndicatorPeriods {
    fn default() -> Self {
        Self {
            rsi: 14,
            ema_fast: 12,
            ema_slow: 26,
        }
    }
}

/// A table row where every indicator is defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub rsi: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
}
