//! Notifier that writes messages to the log instead of sending them

use super::{Notifier, NotifyError};
use async_trait::async_trait;

/// Dry-run notifier
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!(chars = message.chars().count(), "Dry run, message not sent");
        tracing::info!("\n{}", message);
        Ok(())
    }
}
