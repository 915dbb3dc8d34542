//! Alert types

use crate::error::BotError;
use crate::indicators::{IndicatorRow, IndicatorTable};
use serde::{Deserialize, Serialize};

/// RSI alert bounds
///
/// Both values are always supplied together; there is no built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// RSI at or above this is overbought
    pub overbought: f64,
    /// RSI at or below this is oversold
    pub oversold: f64,
}

impl Thresholds {
    pub fn new(overbought: f64, oversold: f64) -> Self {
        Self {
            overbought,
            oversold,
        }
    }

    /// Overbought bound not above oversold bound
    pub fn is_inverted(&self) -> bool {
        self.overbought <= self.oversold
    }
}

/// A discrete alert produced by one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertEvent {
    /// RSI at or above the overbought bound
    OverboughtRsi { rsi: f64 },
    /// RSI at or below the oversold bound
    OversoldRsi { rsi: f64 },
    /// Fast EMA moved above the slow EMA
    GoldenCross { fast: f64, slow: f64 },
    /// Fast EMA moved below the slow EMA
    DeathCross { fast: f64, slow: f64 },
}

impl AlertEvent {
    pub fn is_rsi(&self) -> bool {
        matches!(
            self,
            AlertEvent::OverboughtRsi { .. } | AlertEvent::OversoldRsi { .. }
        )
    }

    pub fn is_cross(&self) -> bool {
        matches!(
            self,
            AlertEvent::GoldenCross { .. } | AlertEvent::DeathCross { .. }
        )
    }
}

/// The two most recent fully defined rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub prev: IndicatorRow,
    pub last: IndicatorRow,
}

impl Snapshot {
    pub fn new(prev: IndicatorRow, last: IndicatorRow) -> Self {
        Self { prev, last }
    }

    /// Take the last two valid rows of a table
    ///
    /// Fewer than two valid rows is reported as insufficient history.
    pub fn from_table(table: &IndicatorTable) -> Result<Self, BotError> {
        match table.last_valid_rows(2).as_slice() {
            [prev, last] => Ok(Self::new(*prev, *last)),
            rows => Err(BotError::InsufficientHistory {
                required: 2,
                available: rows.len(),
            }),
        }
    }
}
