//! Telegram Bot API notifier
//!
//! Posts to `/bot{token}/sendMessage` with Markdown parse mode so bold and
//! code spans in the message body render.

use super::{Notifier, NotifyError};
use crate::config::NotifierConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::telemetry::{increment, record_latency, CounterMetric, LatencyMetric};

/// Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Configuration for the Telegram notifier
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Base URL for the Bot API
    pub base_url: String,
    /// Bot token
    pub token: String,
    /// Destination chat
    pub chat_id: String,
    /// Message parse mode
    pub parse_mode: String,
    /// Request timeout
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Build from the notifier section; the token must be present
    pub fn from_notifier(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| NotifyError::Config("bot token is not set".to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            token,
            chat_id: config.chat_id.clone(),
            parse_mode: config.parse_mode.clone(),
            timeout: config.timeout(),
        })
    }
}

/// sendMessage request body
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Telegram notifier
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn send_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.base_url.trim_end_matches('/'),
            self.config.token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let body = SendMessage {
            chat_id: &self.config.chat_id,
            text: message,
            parse_mode: &self.config.parse_mode,
        };

        let started = Instant::now();
        let response = self.client.post(self.send_url()).json(&body).send().await;
        record_latency(LatencyMetric::Notify, started.elapsed());
        let response = response?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "Telegram rejected message");
            return Err(NotifyError::Status { status, body });
        }

        increment(CounterMetric::MessagesSent, 1);
        tracing::info!(chat_id = %self.config.chat_id, "Message sent");
        Ok(())
    }
}
