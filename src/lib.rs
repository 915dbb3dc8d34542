//! trend-alert: one-shot technical-indicator alert bot
//!
//! This library provides the core components for:
//! - Daily close series ingestion with derived open/high/low
//! - Wilder-style RSI and fast/slow EMA computation
//! - Overbought/oversold and golden/death cross alert evaluation
//! - Message composition for a Markdown chat endpoint
//! - Market-data fetching (CoinGecko) and delivery (Telegram)
//! - A single-pass run orchestrator with error reporting
//! - Structured logging and run metrics

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod indicators;
pub mod message;
pub mod notify;
pub mod runner;
pub mod series;
pub mod telemetry;
