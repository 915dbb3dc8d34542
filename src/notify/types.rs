//! Notifier types

use thiserror::Error;

/// Delivery failures
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport or timeout failure
    ///
    /// The request URL embeds the bot token, so it is stripped on the way in.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    /// Endpoint rejected the message
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Notifier cannot be used as configured
    #[error("notifier misconfigured: {0}")]
    Config(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Http(e.without_url())
    }
}
