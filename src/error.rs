//! Run-level error taxonomy
//!
//! Every failure that can end a run is folded into [`BotError`] before it
//! reaches the orchestrator's error path. Collaborator errors (fetch,
//! series validation, delivery) keep their own types and are mapped here.

use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BotError {
    /// Fetch produced no usable rows, or the fetcher gave up after its retries
    #[error("price data unavailable: {0}")]
    DataUnavailable(String),
    /// Not enough rows to produce two fully defined indicator rows
    #[error("insufficient history: need {required} rows, have {available}")]
    InsufficientHistory { required: usize, available: usize },
    /// Numeric fault while deriving indicators (NaN / Inf propagation)
    #[error("computation error: {0}")]
    Computation(String),
    /// The notifier did not accept the message
    #[error("delivery failure: {0}")]
    DeliveryFailure(String),
}

impl BotError {
    /// Short failure label used in the error notification and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::DataUnavailable(_) => "DataUnavailable",
            BotError::InsufficientHistory { .. } => "InsufficientHistory",
            BotError::Computation(_) => "ComputationError",
            BotError::DeliveryFailure(_) => "DeliveryFailure",
        }
    }

    /// Whether the orchestrator should still try to report this failure
    ///
    /// A delivery failure means the notifier itself is unavailable, so no
    /// second message is attempted.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, BotError::DeliveryFailure(_))
    }
}
