//! Fetcher types

use crate::config::AssetConfig;
use crate::series::SeriesError;
use thiserror::Error;

/// What to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Provider asset identifier (e.g., "bitcoin")
    pub asset_id: String,
    /// Quote currency (e.g., "usd")
    pub vs_currency: String,
    /// Days of history to request
    pub lookback_days: u32,
}

impl From<&AssetConfig> for FetchRequest {
    fn from(asset: &AssetConfig) -> Self {
        Self {
            asset_id: asset.id.clone(),
            vs_currency: asset.vs_currency.clone(),
            lookback_days: asset.lookback_days,
        }
    }
}

/// Fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport, timeout or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Body parsed but held unusable data
    #[error("invalid payload: {0}")]
    Payload(String),
    /// Observations could not form a series
    #[error("invalid series: {0}")]
    Series(#[from] SeriesError),
    /// Every attempt failed
    #[error("giving up after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },
}
