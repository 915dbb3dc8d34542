//! Run orchestrator
//!
//! One pass per invocation: fetch, compute, evaluate, notify. Any failure is
//! absorbed into a single best-effort error notification.

mod orchestrator;
mod types;

pub use orchestrator::Orchestrator;
pub use types::{RunOutcome, RunReport, RunSettings, RunState};
