//! Notifier
//!
//! Delivers a fully composed message. Delivery is attempted once; callers
//! log failures and never retry.

mod dry_run;
mod telegram;
mod types;

pub use dry_run::LogNotifier;
pub use telegram::{TelegramConfig, TelegramNotifier, TELEGRAM_API_URL};
pub use types::NotifyError;

use async_trait::async_trait;

/// Trait for notifier implementations
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message; `Ok` only if the endpoint accepted it
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}
