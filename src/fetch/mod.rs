//! Market-data fetcher
//!
//! Supplies the daily close series for one asset. Retries are internal to
//! the fetcher; callers only see the final outcome.

mod coingecko;
mod types;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_URL};
pub use types::{FetchError, FetchRequest};

use crate::series::Series;
use async_trait::async_trait;

/// Trait for market-data fetcher implementations
#[async_trait]
pub trait PriceFetcher: Send + Sync {
    /// Fetch a time-ascending daily close series
    async fn fetch_daily_series(&self, request: &FetchRequest) -> Result<Series, FetchError>;
}
