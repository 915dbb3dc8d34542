//! Indicator engine
//!
//! Pure functions turning a close-price sequence into parallel indicator
//! sequences (Wilder-style RSI, fast and slow EMA), and the table that lines
//! them up against the source series.

mod ema;
mod rsi;
mod table;
mod types;

pub use ema::ema;
pub use rsi::rsi;
pub use table::{compute_indicators, IndicatorTable};
pub use types::{IndicatorPeriods, IndicatorRow, IndicatorSeries};
