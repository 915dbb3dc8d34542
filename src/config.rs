//! Configuration types for trend-alert

use crate::alert::Thresholds;
use crate::fetch::COINGECKO_API_URL;
use crate::indicators::IndicatorPeriods;
use crate::notify::TELEGRAM_API_URL;
use crate::telemetry::LogFormat;
use chrono::FixedOffset;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the notifier bot token
pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";
/// Environment variable overriding the notifier chat id
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub asset: AssetConfig,
    #[serde(default)]
    pub indicators: IndicatorConfig,
    pub alerts: AlertConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Asset to watch
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Provider identifier (e.g., "bitcoin")
    pub id: String,
    /// Display symbol (e.g., "BTC")
    pub symbol: String,
    /// Quote currency
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,
    /// Days of daily closes to request
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

/// Indicator periods
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
    #[serde(default = "default_ema_fast_period")]
    pub ema_fast_period: usize,
    #[serde(default = "default_ema_slow_period")]
    pub ema_slow_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            ema_fast_period: default_ema_fast_period(),
            ema_slow_period: default_ema_slow_period(),
        }
    }
}

impl IndicatorConfig {
    pub fn periods(&self) -> IndicatorPeriods {
        IndicatorPeriods {
            rsi: self.rsi_period,
            ema_fast: self.ema_fast_period,
            ema_slow: self.ema_slow_period,
        }
    }
}

/// Alert evaluation and reporting
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Overbought/oversold pair, both required
    pub thresholds: Thresholds,

    /// What to do when a run produces no alerts
    #[serde(default)]
    pub report_mode: ReportMode,

    /// Fixed UTC offset for timestamps in messages
    #[serde(default)]
    pub utc_offset_hours: i32,
}

impl AlertConfig {
    /// Offset used to render message timestamps
    pub fn display_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours.checked_mul(3600)?)
    }
}

/// Zero-alert reporting mode
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Send nothing when there are no alerts
    #[default]
    Silent,
    /// Send a routine status message when there are no alerts
    Always,
}

/// Market-data fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    #[serde(default = "default_fetcher_url")]
    pub base_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per run
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Pause between attempts
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_fetcher_url(),
            timeout_secs: default_fetch_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

/// Messaging endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default = "default_notifier_url")]
    pub base_url: String,
    pub chat_id: String,
    /// Bot token; `TELEGRAM_TOKEN` takes precedence
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_notify_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,
}

impl NotifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token with all but the last four characters masked
    pub fn redacted_token(&self) -> String {
        match &self.token {
            Some(token) if token.chars().count() > 4 => {
                let tail: String = token
                    .chars()
                    .rev()
                    .take(4)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("****{}", tail)
            }
            Some(_) => "****".to_string(),
            None => "<unset>".to_string(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_vs_currency() -> String {
    "usd".to_string()
}
fn default_lookback_days() -> u32 {
    365
}
fn default_rsi_period() -> usize {
    14
}
fn default_ema_fast_period() -> usize {
    12
}
fn default_ema_slow_period() -> usize {
    26
}
fn default_fetcher_url() -> String {
    COINGECKO_API_URL.to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    15
}
fn default_max_retries() -> u32 {
    3
}
fn default_retry_delay_secs() -> u64 {
    5
}
fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}
fn default_notifier_url() -> String {
    TELEGRAM_API_URL.to_string()
}
fn default_notify_timeout_secs() -> u64 {
    10
}
fn default_parse_mode() -> String {
    "Markdown".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A period or count that must be positive is zero
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    /// Threshold outside the RSI range
    #[error("threshold {name} = {value} is outside [0, 100]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    /// UTC offset cannot be represented
    #[error("utc_offset_hours {0} is out of range")]
    InvalidOffset(i32),
    /// No bot token configured
    #[error("notifier token missing; set TELEGRAM_TOKEN or notifier.token")]
    MissingToken,
}

impl Config {
    /// Load configuration from a TOML file and apply environment overrides
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.is_empty()) {
            self.notifier.token = Some(token);
        }
        if let Some(chat_id) = lookup(CHAT_ID_ENV).filter(|c| !c.is_empty()) {
            self.notifier.chat_id = chat_id;
        }
    }

    /// Check values the types alone cannot enforce
    pub fn validate(&self, require_token: bool) -> Result<(), ConfigError> {
        if self.asset.lookback_days == 0 {
            return Err(ConfigError::Zero("asset.lookback_days"));
        }
        if self.indicators.rsi_period == 0 {
            return Err(ConfigError::Zero("indicators.rsi_period"));
        }
        if self.indicators.ema_fast_period == 0 {
            return Err(ConfigError::Zero("indicators.ema_fast_period"));
        }
        if self.indicators.ema_slow_period == 0 {
            return Err(ConfigError::Zero("indicators.ema_slow_period"));
        }
        if self.fetcher.max_retries == 0 {
            return Err(ConfigError::Zero("fetcher.max_retries"));
        }

        let thresholds = &self.alerts.thresholds;
        for (name, value) in [
            ("overbought", thresholds.overbought),
            ("oversold", thresholds.oversold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if thresholds.is_inverted() {
            tracing::warn!(
                overbought = thresholds.overbought,
                oversold = thresholds.oversold,
                "Overbought threshold is not above oversold; overbought takes precedence"
            );
        }

        if self.alerts.display_offset().is_none() {
            return Err(ConfigError::InvalidOffset(self.alerts.utc_offset_hours));
        }

        if require_token && self.notifier.token.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingToken);
        }

        Ok(())
    }
}
