//! Indicator table: the source series with its indicator columns

use super::ema::ema;
use super::rsi::rsi;
use super::types::{IndicatorPeriods, IndicatorRow, IndicatorSeries};
use crate::error::BotError;
use crate::series::Series;
use chrono::{DateTime, Utc};

/// Close prices and indicator columns, all of the same length
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    periods: IndicatorPeriods,
    timestamps: Vec<DateTime<Utc>>,
    closes: Vec<f64>,
    rsi: IndicatorSeries,
    ema_fast: IndicatorSeries,
    ema_slow: IndicatorSeries,
}

impl IndicatorTable {
    /// Assemble a table from precomputed columns
    ///
    /// Fails with a computation error if the columns disagree in length.
    pub fn from_parts(
        periods: IndicatorPeriods,
        timestamps: Vec<DateTime<Utc>>,
        closes: Vec<f64>,
        rsi: IndicatorSeries,
        ema_fast: IndicatorSeries,
        ema_slow: IndicatorSeries,
    ) -> Result<Self, BotError> {
        let n = closes.len();
        if timestamps.len() != n || rsi.len() != n || ema_fast.len() != n || ema_slow.len() != n
        {
            return Err(BotError::Computation(format!(
                "column length mismatch: closes={}, timestamps={}, rsi={}, ema_fast={}, ema_slow={}",
                n,
                timestamps.len(),
                rsi.len(),
                ema_fast.len(),
                ema_slow.len()
            )));
        }

        Ok(Self {
            periods,
            timestamps,
            closes,
            rsi,
            ema_fast,
            ema_slow,
        })
    }

    pub fn periods(&self) -> IndicatorPeriods {
        self.periods
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn rsi(&self) -> &IndicatorSeries {
        &self.rsi
    }

    pub fn ema_fast(&self) -> &IndicatorSeries {
        &self.ema_fast
    }

    pub fn ema_slow(&self) -> &IndicatorSeries {
        &self.ema_slow
    }

    /// Row at a position, if all three indicators are defined there
    pub fn row(&self, index: usize) -> Option<IndicatorRow> {
        Some(IndicatorRow {
            timestamp: *self.timestamps.get(index)?,
            close: *self.closes.get(index)?,
            rsi: self.rsi.get(index)?,
            ema_fast: self.ema_fast.get(index)?,
            ema_slow: self.ema_slow.get(index)?,
        })
    }

    /// Rows where every indicator is defined, oldest first
    pub fn valid_rows(&self) -> impl Iterator<Item = IndicatorRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    /// The last `count` valid rows, oldest first
    pub fn last_valid_rows(&self, count: usize) -> Vec<IndicatorRow> {
        let mut rows: Vec<IndicatorRow> = (0..self.len())
            .rev()
            .filter_map(|i| self.row(i))
            .take(count)
            .collect();
        rows.reverse();
        rows
    }
}

/// Derive RSI and both EMAs for a series
///
/// Requires `rsi + 2` closes so the RSI seed window of `rsi + 1` price
/// changes is complete. Non-finite indicator output is reported as a
/// computation error.
pub fn compute_indicators(
    series: &Series,
    periods: IndicatorPeriods,
) -> Result<IndicatorTable, BotError> {
    if periods.rsi == 0 || periods.ema_fast == 0 || periods.ema_slow == 0 {
        return Err(BotError::Computation(format!(
            "indicator periods must be non-zero: {:?}",
            periods
        )));
    }

    let required = periods.rsi.saturating_add(2);
    if series.len() < required {
        return Err(BotError::InsufficientHistory {
            required,
            available: series.len(),
        });
    }

    let closes = series.closes();
    let rsi = rsi(&closes, periods.rsi);
    let ema_fast = ema(&closes, periods.ema_fast);
    let ema_slow = ema(&closes, periods.ema_slow);

    for (name, column) in [("rsi", &rsi), ("ema_fast", &ema_fast), ("ema_slow", &ema_slow)] {
        if let Some(index) = column.first_non_finite() {
            return Err(BotError::Computation(format!(
                "{} is not finite at index {}",
                name, index
            )));
        }
    }

    tracing::debug!(
        rows = closes.len(),
        rsi_period = periods.rsi,
        ema_fast_period = periods.ema_fast,
        ema_slow_period = periods.ema_slow,
        "Computed indicators"
    );

    IndicatorTable::from_parts(
        periods,
        series.timestamps(),
        closes,
        rsi,
        ema_fast,
        ema_slow,
    )
}
