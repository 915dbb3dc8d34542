//! CoinGecko market-chart client
//!
//! Pulls daily closes from `/coins/{id}/market_chart`. The endpoint returns
//! `{"prices": [[ms, price], ...]}` oldest first.

use super::{FetchError, FetchRequest, PriceFetcher};
use crate::config::FetcherConfig;
use crate::series::Series;
use crate::telemetry::{increment, record_latency, CounterMetric, LatencyMetric};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// CoinGecko public API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total attempts before giving up
    pub max_retries: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            timeout: Duration::from_secs(15),
            max_retries: 3,
            retry_delay: Duration::from_secs(5),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl From<&FetcherConfig> for CoinGeckoConfig {
    fn from(config: &FetcherConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Client for the CoinGecko market-chart endpoint
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    client: Client,
}

impl CoinGeckoClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { config, client })
    }

    fn chart_url(&self, asset_id: &str) -> String {
        format!(
            "{}/coins/{}/market_chart",
            self.config.base_url.trim_end_matches('/'),
            asset_id
        )
    }

    /// Single request, no retry
    async fn fetch_once(&self, request: &FetchRequest) -> Result<Series, FetchError> {
        let url = self.chart_url(&request.asset_id);
        let days = request.lookback_days.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", request.vs_currency.as_str()),
                ("days", days.as_str()),
                ("interval", "daily"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let chart: MarketChart = response.json().await?;
        parse_chart(chart)
    }
}

#[async_trait]
impl PriceFetcher for CoinGeckoClient {
    async fn fetch_daily_series(&self, request: &FetchRequest) -> Result<Series, FetchError> {
        let attempts = self.config.max_retries.max(1);
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            tracing::info!(
                asset = %request.asset_id,
                attempt,
                max_attempts = attempts,
                "Fetching daily series"
            );

            let started = Instant::now();
            increment(CounterMetric::FetchAttempts, 1);
            let result = self.fetch_once(request).await;
            record_latency(LatencyMetric::Fetch, started.elapsed());

            match result {
                Ok(series) => {
                    tracing::info!(
                        rows = series.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Fetched daily series"
                    );
                    return Ok(series);
                }
                Err(e) => {
                    tracing::warn!(error = %e, attempt, "Fetch attempt failed");
                    last_error = e.to_string();

                    if attempt < attempts {
                        tracing::info!(delay_secs = self.config.retry_delay.as_secs(), "Retrying");
                        sleep(self.config.retry_delay).await;
                    }
                }
            }
        }

        tracing::error!(attempts, "Fetch failed on every attempt");
        Err(FetchError::Exhausted {
            attempts,
            last: last_error,
        })
    }
}

/// Market-chart response body
#[derive(Debug, Deserialize)]
struct MarketChart {
    /// `[timestamp_ms, price]` pairs
    prices: Vec<(f64, f64)>,
}

/// Convert a market-chart body into a series
fn parse_chart(chart: MarketChart) -> Result<Series, FetchError> {
    let observations = chart
        .prices
        .into_iter()
        .map(|(ms, price)| {
            Utc.timestamp_millis_opt(ms as i64)
                .single()
                .map(|ts| (ts, price))
                .ok_or_else(|| FetchError::Payload(format!("invalid timestamp {}", ms)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Series::from_observations(observations)?)
}
