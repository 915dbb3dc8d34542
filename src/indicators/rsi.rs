//! Wilder-style RSI with a single seeded warm-up value
//!
//! The seed averages gains and losses over the first `period + 1` price
//! changes, and that one value is written to every warm-up position
//! `0..period`. From `period` onward each position applies Wilder
//! smoothing to the change that ends one step earlier.

use super::types::IndicatorSeries;

/// Relative Strength Index over `closes`
///
/// The result has the same length as `closes`. A short input is accepted:
/// the seed window simply holds whatever changes exist. When the smoothed
/// loss is exactly zero the ratio is taken as 0, so a series with no losses
/// reports 0 rather than 100.
///
/// A zero `period` has no meaning and yields an all-undefined series.
pub fn rsi(closes: &[f64], period: usize) -> IndicatorSeries {
    let n = closes.len();
    if n == 0 || period == 0 {
        return IndicatorSeries::undefined(n);
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let span = period as f64;

    let seed = &deltas[..deltas.len().min(period.saturating_add(1))];
    let mut up = seed.iter().filter(|d| **d >= 0.0).sum::<f64>() / span;
    let mut down = seed.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / span;

    let mut values = vec![strength_index(up, down); n.min(period)];
    values.reserve(n.saturating_sub(period));

    for i in period..n {
        let delta = deltas[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        up = (up * (span - 1.0) + gain) / span;
        down = (down * (span - 1.0) + loss) / span;
        values.push(strength_index(up, down));
    }

    IndicatorSeries::from_defined(values)
}

fn strength_index(up: f64, down: f64) -> f64 {
    let rs = if down != 0.0 { up / down } else { 0.0 };
    100.0 - 100.0 / (1.0 + rs)
}
