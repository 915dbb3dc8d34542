//! Alert rules
//!
//! Rules run in a fixed order, which only affects message ordering:
//! 1. RSI overbought, else RSI oversold
//! 2. Golden cross
//! 3. Death cross
//!
//! Cross rules compare non-strictly at `prev` and strictly at `last`, so a
//! tie at `last` never fires and a flat market never reports a cross.

use super::types::{AlertEvent, Snapshot, Thresholds};
use crate::error::BotError;
use crate::indicators::IndicatorTable;

/// Evaluate all rules against a snapshot
pub fn evaluate(snapshot: &Snapshot, thresholds: &Thresholds) -> Vec<AlertEvent> {
    let Snapshot { prev, last } = snapshot;
    let mut alerts = Vec::new();

    if last.rsi >= thresholds.overbought {
        alerts.push(AlertEvent::OverboughtRsi { rsi: last.rsi });
    } else if last.rsi <= thresholds.oversold {
        alerts.push(AlertEvent::OversoldRsi { rsi: last.rsi });
    }

    if prev.ema_fast <= prev.ema_slow && last.ema_fast > last.ema_slow {
        alerts.push(AlertEvent::GoldenCross {
            fast: last.ema_fast,
            slow: last.ema_slow,
        });
    }

    if prev.ema_fast >= prev.ema_slow && last.ema_fast < last.ema_slow {
        alerts.push(AlertEvent::DeathCross {
            fast: last.ema_fast,
            slow: last.ema_slow,
        });
    }

    alerts
}

/// Build the snapshot from a table and evaluate it
pub fn evaluate_alerts(
    table: &IndicatorTable,
    thresholds: &Thresholds,
) -> Result<Vec<AlertEvent>, BotError> {
    let snapshot = Snapshot::from_table(table)?;
    Ok(evaluate(&snapshot, thresholds))
}
