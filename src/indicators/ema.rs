//! Exponential moving average

use super::types::IndicatorSeries;

/// EMA seeded with the first close, smoothing factor `2 / (period + 1)`
///
/// Every position is defined from index 0, so the result is exactly as long
/// as `closes`.
pub fn ema(closes: &[f64], period: usize) -> IndicatorSeries {
    let Some((&first, rest)) = closes.split_first() else {
        return IndicatorSeries::default();
    };

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(closes.len());
    let mut prev = first;
    values.push(prev);

    for &close in rest {
        prev = close * multiplier + prev * (1.0 - multiplier);
        values.push(prev);
    }

    IndicatorSeries::from_defined(values)
}
