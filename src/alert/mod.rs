//! Alert evaluator
//!
//! Compares the last two fully defined indicator rows against static RSI
//! thresholds and against each other (EMA order inversion).

mod evaluator;
mod types;

pub use evaluator::{evaluate, evaluate_alerts};
pub use types::{AlertEvent, Snapshot, Thresholds};
